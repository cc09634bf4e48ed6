//! Persisted user preferences.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::i18n::Language;

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Effective preferences for the running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    /// Active theme.
    pub theme: Theme,
    /// Active language.
    pub language: Language,
}

impl Preferences {
    /// Resolves startup preferences.
    ///
    /// A stored theme wins, then the detected system theme, then light. A stored
    /// language wins, then Arabic.
    #[must_use]
    pub fn resolve(stored: &StoredPreferences, system_theme: Option<Theme>) -> Self {
        Self {
            theme: stored.theme.or(system_theme).unwrap_or_default(),
            language: stored.language.unwrap_or_default(),
        }
    }

    /// Converts into the persisted form.
    #[must_use]
    pub const fn to_stored(self) -> StoredPreferences {
        StoredPreferences {
            theme: Some(self.theme),
            language: Some(self.language),
        }
    }
}

/// Preferences as found on disk; either field may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredPreferences {
    /// Saved theme.
    #[serde(default)]
    pub theme: Option<Theme>,
    /// Saved language.
    #[serde(default)]
    pub language: Option<Language>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_stored_values() {
        let stored = StoredPreferences {
            theme: Some(Theme::Dark),
            language: Some(Language::En),
        };

        let prefs = Preferences::resolve(&stored, Some(Theme::Light));

        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::En);
    }

    #[test]
    fn test_resolve_falls_back_to_system_then_defaults() {
        let prefs = Preferences::resolve(&StoredPreferences::default(), Some(Theme::Dark));
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::Ar);

        let prefs = Preferences::resolve(&StoredPreferences::default(), None);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn test_theme_toggle_twice_restores() {
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
