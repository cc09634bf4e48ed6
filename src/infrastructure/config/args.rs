use super::app_config::LogLevel;
use crate::domain::i18n::Language;
use crate::domain::preferences::Theme;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "biomed",
    version,
    about = "A bilingual biomedical-engineering catalog for the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Interface language for this session.
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Color theme for this session.
    #[arg(short, long, value_enum)]
    pub theme: Option<Theme>,

    /// Content model name.
    #[arg(long, env = "BIOMED_MODEL")]
    pub model: Option<String>,

    /// Content request timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Directory containing lecture files.
    #[arg(long, value_name = "PATH")]
    pub lectures_dir: Option<PathBuf>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
