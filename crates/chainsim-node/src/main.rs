//! Entrypoint for the chain simulator node: flag parsing, logging init,
//! wiring the dispatcher to the HTTP surface, graceful shutdown.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use chainsim_engine::Dispatcher;
use chainsim_gateway::{build_router, AppState, NodeConfig};
use chainsim_world::MockVmHost;

/// Local simulated blockchain node — emulates the gateway JSON HTTP API
/// over an in-process mock world (spec.md §6 "CLI flags").
#[derive(Debug, Parser)]
#[command(name = "chainsim-node", about = "Local simulated chain node")]
struct Cli {
    /// Port the HTTP server binds on localhost.
    #[arg(long, default_value_t = 8085)]
    server_port: u16,

    /// Size of the retained-transaction ring (spec.md §4.4).
    #[arg(long, default_value_t = 200)]
    txs_to_keep: usize,

    /// `tracing-subscriber` env-filter directive, e.g. "info" or "debug".
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut config = NodeConfig::default();
    config.server_port = cli.server_port;
    config.number_of_txs_to_keep = cli.txs_to_keep;

    let dispatcher = Dispatcher::new(config.dispatcher_config(), Box::new(MockVmHost::new()));
    let state = AppState::new(dispatcher);
    let router = build_router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!(%addr, error = %e, "failed to bind HTTP listener");
        e
    })?;
    info!(%addr, "chainsim-node listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("chainsim-node shut down cleanly");
    Ok(())
}

fn init_logging(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    info!("received ctrl-c, shutting down");
}
