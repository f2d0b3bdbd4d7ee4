//! demo-service entry point.
//!
//! Initializes tracing, loads configuration from a TOML file, builds the Axum
//! router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use demo_service::config::{
    AppConfig, LoggingConfig, APP_NAME, APP_VERSION, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER,
};
use demo_service::http::start_server;
use demo_service::routes::create_router;

/// demo-service: health and build-info endpoints
#[derive(Parser, Debug)]
#[command(name = "demo-service", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "demo_service=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Format is read ahead of full validation so config errors get logged too
    let logging = LoggingConfig::peek(&args.config);
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let config = match AppConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(path = %args.config, error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    tracing::info!(
        path = %args.config,
        tls_mode = ?config.http.tls.mode,
        log_format = %config.logging.format,
        "Loaded configuration"
    );
    tracing::info!(app = APP_NAME, version = APP_VERSION, "Serving build info");

    let app = create_router();

    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
