//! Theme and language preference handling.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::i18n::Language;
use crate::domain::ports::PreferencesPort;
use crate::domain::preferences::{Preferences, StoredPreferences, Theme};

/// Owns the session preferences and writes toggled values through.
///
/// Session overrides only change `current`; a toggle writes its own field
/// over what was loaded from disk.
#[derive(Clone)]
pub struct PreferencesService {
    port: Arc<dyn PreferencesPort>,
    current: Preferences,
    /// What is on disk; only toggled fields are written over it.
    stored: StoredPreferences,
}

impl PreferencesService {
    /// Loads stored preferences, falling back to the detected system theme.
    ///
    /// A failed read is logged and treated as "nothing stored".
    pub async fn load(port: Arc<dyn PreferencesPort>, system_theme: Option<Theme>) -> Self {
        let stored = match port.load().await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "Failed to read preferences, using defaults");
                StoredPreferences::default()
            }
        };
        let current = Preferences::resolve(&stored, system_theme);
        info!(theme = %current.theme, language = %current.language, "Preferences resolved");

        Self {
            port,
            current,
            stored,
        }
    }

    /// Current preferences.
    #[must_use]
    pub const fn current(&self) -> Preferences {
        self.current
    }

    /// Switches theme and persists it.
    pub async fn toggle_theme(&mut self) -> Theme {
        self.current.theme = self.current.theme.toggled();
        self.stored.theme = Some(self.current.theme);
        self.persist().await;
        self.current.theme
    }

    /// Switches language and persists it.
    pub async fn toggle_language(&mut self) -> Language {
        self.current.language = self.current.language.toggled();
        self.stored.language = Some(self.current.language);
        self.persist().await;
        self.current.language
    }

    /// Replaces preferences for this session. Nothing is written, and later
    /// toggles of the other field leave this value off disk.
    pub fn override_with(&mut self, theme: Option<Theme>, language: Option<Language>) {
        if let Some(theme) = theme {
            self.current.theme = theme;
        }
        if let Some(language) = language {
            self.current.language = language;
        }
    }

    async fn persist(&self) {
        match self.port.save(&self.stored).await {
            Ok(()) => debug!(stored = ?self.stored, "Preferences saved"),
            Err(e) => error!(error = %e, "Failed to save preferences"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::PreferencesError;
    use crate::domain::ports::mocks::MockPreferencesPort;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_load_uses_stored_values() {
        let mut port = MockPreferencesPort::new();
        port.expect_load().returning(|| {
            Ok(StoredPreferences {
                theme: Some(Theme::Dark),
                language: Some(Language::En),
            })
        });

        let service = PreferencesService::load(Arc::new(port), Some(Theme::Light)).await;

        assert_eq!(service.current().theme, Theme::Dark);
        assert_eq!(service.current().language, Language::En);
    }

    #[tokio::test]
    async fn test_load_failure_falls_back() {
        let mut port = MockPreferencesPort::new();
        port.expect_load()
            .returning(|| Err(PreferencesError::ReadFailed("denied".to_string())));

        let service = PreferencesService::load(Arc::new(port), Some(Theme::Dark)).await;

        assert_eq!(service.current().theme, Theme::Dark);
        assert_eq!(service.current().language, Language::Ar);
    }

    fn recording_port(
        stored: StoredPreferences,
        saves: usize,
    ) -> (MockPreferencesPort, Arc<Mutex<Vec<StoredPreferences>>>) {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let sink = saved.clone();

        let mut port = MockPreferencesPort::new();
        port.expect_load().returning(move || Ok(stored));
        port.expect_save().times(saves).returning(move |prefs| {
            sink.lock().unwrap().push(*prefs);
            Ok(())
        });
        (port, saved)
    }

    #[tokio::test]
    async fn test_toggling_twice_restores_persisted_value() {
        let (port, saved) = recording_port(StoredPreferences::default(), 4);

        let mut service = PreferencesService::load(Arc::new(port), None).await;
        let original = service.current();

        service.toggle_theme().await;
        service.toggle_theme().await;
        service.toggle_language().await;
        service.toggle_language().await;

        let saved = saved.lock().unwrap();
        assert_eq!(saved.len(), 4);
        assert_eq!(
            saved[1],
            StoredPreferences {
                theme: Some(Theme::Light),
                language: None,
            }
        );
        assert_eq!(saved[2].language, Some(Language::En));
        assert_eq!(saved[3], original.to_stored());
        assert_eq!(service.current(), original);
    }

    #[tokio::test]
    async fn test_session_override_is_not_written_by_theme_toggle() {
        let stored = StoredPreferences {
            theme: None,
            language: Some(Language::Ar),
        };
        let (port, saved) = recording_port(stored, 1);

        let mut service = PreferencesService::load(Arc::new(port), None).await;
        service.override_with(None, Some(Language::En));
        service.toggle_theme().await;

        assert_eq!(service.current().language, Language::En);
        assert_eq!(
            saved.lock().unwrap()[0],
            StoredPreferences {
                theme: Some(Theme::Dark),
                language: Some(Language::Ar),
            }
        );
    }

    #[tokio::test]
    async fn test_save_failure_keeps_new_value() {
        let mut port = MockPreferencesPort::new();
        port.expect_load().returning(|| Ok(StoredPreferences::default()));
        port.expect_save()
            .returning(|_| Err(PreferencesError::WriteFailed("read-only".to_string())));

        let mut service = PreferencesService::load(Arc::new(port), None).await;

        assert_eq!(service.toggle_theme().await, Theme::Dark);
        assert_eq!(service.current().theme, Theme::Dark);
    }
}
