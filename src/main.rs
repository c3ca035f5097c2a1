//! swarm-hello: a greeting and health-check HTTP service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration, sets up the Axum router, and starts the HTTP server.

use clap::Parser;
use const_format::formatcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swarm_hello::config::{AppConfig, LogFormat, DEFAULT_HTTP_ADDR, DEFAULT_LOG_FILTER};
use swarm_hello::http::start_server;
use swarm_hello::{create_router, AppState};

const AFTER_HELP: &str = formatcp!(
    "Listens on {} unless configured otherwise.",
    DEFAULT_HTTP_ADDR
);

/// swarm-hello: greeting and health-check HTTP service
#[derive(Parser, Debug)]
#[command(name = "swarm-hello", version, about)]
#[command(after_help = AFTER_HELP)]
struct Args {
    /// Path to configuration file (default: config/default.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Listen host, overrides http.host
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides http.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "swarm_hello=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before tracing so the log format is known
    let config = AppConfig::resolve(args.config.as_deref())?.with_overrides(args.host, args.port)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        cors = config.http.enable_cors,
        version = env!("CARGO_PKG_VERSION"),
        "Loaded configuration"
    );

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
