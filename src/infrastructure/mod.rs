//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Generative content service client.
pub mod gemini;
/// Lecture file access.
pub mod lectures;
pub mod links;
/// Preference persistence.
pub mod preferences_store;
pub mod terminal_theme;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use gemini::GeminiContentClient;
pub use lectures::{LectureLibrary, LibraryError};
pub use links::{book_search_url, open_url};
pub use preferences_store::FilePreferencesStore;
pub use terminal_theme::detect_terminal_theme;
