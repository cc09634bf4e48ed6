use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use biomed_catalog::application::{LoadContentUseCase, PreferencesService};
use biomed_catalog::infrastructure::{
    AppConfig, CliArgs, FilePreferencesStore, GeminiContentClient, LectureLibrary,
    StorageManager, detect_terminal_theme,
};
use biomed_catalog::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, StorageManager)> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    Ok((config, storage))
}

async fn create_app() -> Result<App> {
    let (config, storage) = load_config()?;

    init_logging(&config)?;

    info!(version = biomed_catalog::VERSION, "Starting {}", biomed_catalog::NAME);

    let api_key = config.content.api_key();
    if api_key.is_none() {
        warn!(
            env = %config.content.api_key_env,
            "No API key configured, content requests will fail"
        );
    }
    let content = Arc::new(GeminiContentClient::new(&config.content, api_key)?);

    // Queried before the terminal enters raw mode.
    let system_theme =
        detect_terminal_theme(Duration::from_millis(config.ui.theme_detection_ms));

    let preferences_store = Arc::new(FilePreferencesStore::new(storage));
    let mut preferences = PreferencesService::load(preferences_store, system_theme).await;
    preferences.override_with(config.theme, config.language);

    let app = App::new(
        LoadContentUseCase::new(content),
        preferences,
        LectureLibrary::new(&config.lectures),
        &config.ui.accent_color,
    );

    Ok(app)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let app = create_app().await?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
