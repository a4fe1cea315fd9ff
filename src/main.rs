//! LifeFit AI server entry point.
//!
//! Initializes tracing, loads configuration from TOML and the environment, then
//! starts either the static asset server or the panel UI.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lifefit::config::{AppConfig, LoggingConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use lifefit::http::{static_files::check_entry_document, start_server};
use lifefit::routes::{create_site_router, create_ui_router};
use lifefit::state::AppState;
use lifefit::templates::init_templates;

/// LifeFit AI: front-end host and demo panels
#[derive(Parser, Debug)]
#[command(name = "lifefit", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "lifefit=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default)]
enum Command {
    /// Serve the pre-built front-end (default)
    #[default]
    Serve,
    /// Serve the form-driven panel UI
    Ui,
}

fn init_tracing(filter: &str, logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration first: the log format lives in it
    let config = AppConfig::load(&args.config)?;

    // Log filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(path = %args.config, "Loaded configuration");
    for (name, set) in config.api_keys.presence() {
        tracing::debug!(key = name, configured = set, "API key");
    }

    match args.command.unwrap_or_default() {
        Command::Serve => {
            tracing::info!(
                root = %config.assets.root.display(),
                index = %config.assets.index,
                "Serving static front-end"
            );
            check_entry_document(&config.assets);

            let app = create_site_router(&config.assets);
            start_server(app, "site", &config.http.host, config.http.port).await?;
        }
        Command::Ui => {
            let tera = init_templates()?;
            tracing::info!("Initialized templates");

            let (host, port) = (config.ui.host.clone(), config.ui.port);
            let state = AppState::new(config, tera);
            let app = create_ui_router(state);
            start_server(app, "ui", &host, port).await?;
        }
    }

    Ok(())
}
