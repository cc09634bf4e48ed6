//! Preference persistence error types.

use thiserror::Error;

/// Preference persistence error variants.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("failed to read preferences: {0}")]
    ReadFailed(String),

    #[error("failed to write preferences: {0}")]
    WriteFailed(String),
}
