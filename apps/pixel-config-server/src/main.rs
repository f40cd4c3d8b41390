//! pixel-config-server - settings endpoint for the LED pixel controller
//!
//! Serves `GET /settings` and `POST /update` over an in-memory settings cell.
//! Settings are lost when the process exits.

use anyhow::{Context, Result};
use clap::Parser;
use device_settings::DeviceSettingsModule;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::{AppConfig, CliOverrides};

#[derive(Debug, Parser)]
#[command(name = "pixel-config-server", version, about = "LED pixel controller settings server")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:3000
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Default log filter (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_addr: cli.bind,
        log_level: cli.log_level.clone(),
    };
    let app_config = config::load(cli.config.as_deref(), &overrides)?;

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&app_config)?);
        return Ok(());
    }

    init_tracing(&app_config.logging.level);

    info!(
        "Starting pixel-config-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    run(app_config).await
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(app_config: AppConfig) -> Result<()> {
    let module = DeviceSettingsModule::init(app_config.device_settings);
    let app = module.register_rest(axum::Router::new())?;

    let listener = tokio::net::TcpListener::bind(app_config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", app_config.server.bind_addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_on_signal(cancel.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_on_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
    cancel.cancel();
}
