use async_trait::async_trait;

use crate::domain::errors::PreferencesError;
use crate::domain::ports::PreferencesPort;
use crate::domain::preferences::StoredPreferences;
use crate::infrastructure::config::StorageManager;

/// Preferences kept in `preferences.toml` next to the config file.
#[derive(Debug, Clone)]
pub struct FilePreferencesStore {
    storage: StorageManager,
}

impl FilePreferencesStore {
    #[must_use]
    pub const fn new(storage: StorageManager) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl PreferencesPort for FilePreferencesStore {
    async fn load(&self) -> Result<StoredPreferences, PreferencesError> {
        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || storage.load_preferences())
            .await
            .map_err(|e| PreferencesError::ReadFailed(e.to_string()))?
            .map_err(|e| PreferencesError::ReadFailed(e.to_string()))
    }

    async fn save(&self, preferences: &StoredPreferences) -> Result<(), PreferencesError> {
        let storage = self.storage.clone();
        let stored = *preferences;
        tokio::task::spawn_blocking(move || storage.save_preferences(&stored))
            .await
            .map_err(|e| PreferencesError::WriteFailed(e.to_string()))?
            .map_err(|e| PreferencesError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::i18n::Language;
    use crate::domain::preferences::{Preferences, Theme};
    use tempfile::tempdir;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_round_trip_through_port() {
        let dir = tempdir().unwrap();
        let store = FilePreferencesStore::new(StorageManager::with_dir(dir.path().to_path_buf()));
        let prefs = Preferences {
            theme: Theme::Dark,
            language: Language::En,
        };

        assert_ok!(store.save(&prefs.to_stored()).await);
        let stored = assert_ok!(store.load().await);

        assert_eq!(Preferences::resolve(&stored, None), prefs);
    }

    #[tokio::test]
    async fn test_unset_field_stays_unset() {
        let dir = tempdir().unwrap();
        let store = FilePreferencesStore::new(StorageManager::with_dir(dir.path().to_path_buf()));
        let partial = StoredPreferences {
            theme: Some(Theme::Dark),
            language: None,
        };

        assert_ok!(store.save(&partial).await);

        assert_eq!(assert_ok!(store.load().await), partial);
    }

    #[tokio::test]
    async fn test_save_into_unwritable_location_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let store = FilePreferencesStore::new(StorageManager::with_dir(blocker.join("nested")));

        let error = assert_err!(store.save(&StoredPreferences::default()).await);

        assert!(matches!(error, PreferencesError::WriteFailed(_)));
    }
}
