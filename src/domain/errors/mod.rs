//! Domain error types.

mod content_error;
mod preferences_error;

pub use content_error::ContentError;
pub use preferences_error::PreferencesError;
