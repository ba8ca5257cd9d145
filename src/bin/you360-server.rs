// ABOUTME: HTTP server binary for the You360 wellness dashboard API
// ABOUTME: Loads configuration from the environment and serves until Ctrl+C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # You360 Server Binary
//!
//! Starts the dashboard API. The Gemini key is read from `GEMINI_API_KEY`;
//! without it the server still runs and every AI feature reports the missing
//! credential in its display area.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use you360::{
    config::AppConfig, llm::http_client::initialize_shared_client, logging::LoggingConfig,
    resources::ServerResources, routes,
};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(name = "you360-server")]
#[command(about = "You360 wellness dashboard API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env().init()?;

    let mut config = AppConfig::from_env();
    if let Some(port) = args.port {
        config.server.port = port;
    }

    info!("Starting You360 dashboard API");
    if !config.llm.has_api_key() {
        warn!("GEMINI_API_KEY is not set; AI features will report a missing credential");
    }

    initialize_shared_client(config.http);
    let resources = Arc::new(ServerResources::from_config(&config));
    spawn_session_sweeper(Arc::clone(&resources));
    let app = routes::router(resources);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server shut down");
    Ok(())
}

/// Periodically close sessions that outlived the idle lifetime
fn spawn_session_sweeper(resources: Arc<ServerResources>) {
    let period = resources
        .server_config
        .session_idle_ttl()
        .clamp(Duration::from_secs(1), SESSION_SWEEP_INTERVAL);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            resources.evict_idle_sessions();
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
}
