//! Domain layer with core catalog entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Category denylist and device search.
pub mod filter;
/// Localized strings.
pub mod i18n;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Theme and language preferences.
pub mod preferences;
/// Views and back navigation.
pub mod view;

pub use errors::{ContentError, PreferencesError};
pub use i18n::{Language, TextKey, tr, tr_with};
pub use ports::{ContentPort, PreferencesPort};
pub use preferences::{Preferences, StoredPreferences, Theme};
pub use view::{HubEntry, View};
