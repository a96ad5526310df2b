//! Demo server for status-returning handlers.
//!
//! ```text
//! GET /              handler writes its own body, returns sentinel 0
//! GET /health        200, no error
//! GET /fail          500, "error happened"
//! GET /status/{code} arbitrary status, error for 4xx/5xx
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use status_fn::config::{load_config, ConfigWatcher, ServiceConfig};
use status_fn::lifecycle::{trigger_on_signal, Shutdown};
use status_fn::observability::logging;
use status_fn::policy::{build_policy, PolicyHandle};
use status_fn::routes::demo_routes;
use status_fn::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "status-fn", version, about = "Serve status-returning handlers")]
struct Cli {
    /// Path to a TOML configuration file, watched for policy changes.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability)?;
    tracing::info!("status-fn v{} starting", env!("CARGO_PKG_VERSION"));

    let policy = PolicyHandle::global();
    policy.replace(build_policy(&config.policy));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        policy = policy.current_name(),
        "Configuration loaded"
    );

    // The watcher must outlive the server.
    let (_watcher, config_updates) = match &cli.config {
        Some(path) => {
            let (watcher, rx) = ConfigWatcher::new(path);
            (Some(watcher.run()?), rx)
        }
        None => {
            let (_, rx) = mpsc::unbounded_channel();
            (None, rx)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(trigger_on_signal(shutdown.clone()));

    let server = HttpServer::new(config, demo_routes(&policy), policy);
    server.run(listener, config_updates, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
