//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::i18n::Language;
use crate::domain::preferences::Theme;

pub(crate) const APP_NAME: &str = "biomed-catalog";
pub(crate) const APP_QUALIFIER: &str = "org";
pub(crate) const APP_ORGANIZATION: &str = "biomed";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and CLI arguments.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Language for this session only.
    #[serde(skip)]
    pub language: Option<Language>,

    /// Theme for this session only.
    #[serde(skip)]
    pub theme: Option<Theme>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Content service configuration.
    #[serde(default)]
    pub content: ContentServiceConfig,

    /// Lecture file locations.
    #[serde(default)]
    pub lectures: LecturesConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Generative content service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentServiceConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl ContentServiceConfig {
    /// Reads the API key from the configured variable, then from `API_KEY`.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        [self.api_key_env.as_str(), "API_KEY"]
            .into_iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())
    }
}

impl Default for ContentServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Lecture file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LecturesConfig {
    /// Directory the lecture files live in.
    #[serde(default = "default_lectures_dir")]
    pub dir: PathBuf,

    /// Where downloads are copied; the user download directory when unset.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for LecturesConfig {
    fn default() -> Self {
        Self {
            dir: default_lectures_dir(),
            download_dir: None,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Timeout for terminal background detection, in milliseconds.
    #[serde(default = "default_theme_detection_ms")]
    pub theme_detection_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            theme_detection_ms: default_theme_detection_ms(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

const fn default_timeout_secs() -> u64 {
    60
}

fn default_lectures_dir() -> PathBuf {
    PathBuf::from("lectures")
}

fn default_accent_color() -> String {
    "#14b8a6".to_string()
}

const fn default_theme_detection_ms() -> u64 {
    100
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(language) = args.language {
            self.language = Some(language);
        }
        if let Some(theme) = args.theme {
            self.theme = Some(theme);
        }
        if let Some(model) = args.model {
            self.content.model = model;
        }
        if let Some(timeout) = args.timeout_secs {
            self.content.timeout_secs = timeout;
        }
        if let Some(dir) = args.lectures_dir {
            self.lectures.dir = dir;
        }
        if let Some(accent_color) = args.accent_color {
            self.ui.accent_color = accent_color;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("biomed-catalog.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            language: None,
            theme: None,
            log_level: LogLevel::Info,
            content: ContentServiceConfig::default(),
            lectures: LecturesConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [content]
            model = "gemini-2.0-flash"

            [lectures]
            dir = "/srv/lectures"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.content.model, "gemini-2.0-flash");
        assert_eq!(config.content.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.content.timeout_secs, 60);
        assert_eq!(config.lectures.dir, PathBuf::from("/srv/lectures"));
        assert!(config.lectures.download_dir.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.content.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.lectures.dir, PathBuf::from("lectures"));
        assert!(config.language.is_none());
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "biomed",
            "--language",
            "en",
            "--theme",
            "dark",
            "--model",
            "custom-model",
            "--lectures-dir",
            "/tmp/lectures",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.language, Some(Language::En));
        assert_eq!(config.theme, Some(Theme::Dark));
        assert_eq!(config.content.model, "custom-model");
        assert_eq!(config.lectures.dir, PathBuf::from("/tmp/lectures"));
    }
}
