//! Preference persistence port definition.

use async_trait::async_trait;

use crate::domain::errors::PreferencesError;
use crate::domain::preferences::StoredPreferences;

/// Port for theme and language persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferencesPort: Send + Sync {
    /// Reads stored preferences; missing values are `None`.
    async fn load(&self) -> Result<StoredPreferences, PreferencesError>;

    /// Persists the given preferences; `None` fields stay unset on disk.
    async fn save(&self, preferences: &StoredPreferences) -> Result<(), PreferencesError>;
}
