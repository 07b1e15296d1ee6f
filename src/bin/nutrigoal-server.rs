// ABOUTME: Server binary for the nutrigoal calorie and macro goal API
// ABOUTME: Loads configuration, initializes logging, and serves the axum router until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrigoal Server Binary

use anyhow::{Context, Result};
use clap::Parser;
use nutrigoal_server::{
    config::environment::ServerConfig, logging, resources::ServerResources, routes,
};
use std::net::IpAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "nutrigoal-server")]
#[command(about = "Nutrigoal - daily calorie and macro goal API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    http_host: Option<IpAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(http_host) = args.http_host {
        config.http_host = http_host;
    }

    logging::init_from_env()?;

    info!("Starting Nutrigoal server");
    info!("{}", config.summary());

    let addr = config.bind_addr();
    let resources = Arc::new(
        ServerResources::from_env(config).context("Invalid nutrition configuration")?,
    );
    let app = routes::build_router(resources);

    display_available_endpoints(&addr.to_string());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP server (Axum) listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(addr: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  http://{addr}/health");
    info!("   Readiness:         GET  http://{addr}/ready");
    info!("   Calorie Preview:   POST http://{addr}/api/nutrition/calories/preview");
    info!("   Diet Modes:        GET  http://{addr}/api/nutrition/diet-modes");
    info!("   Diet Mode:         GET  http://{addr}/api/nutrition/diet-modes/{{id}}");
    info!("   Classify Split:    POST http://{addr}/api/nutrition/diet-modes/classify");
    info!("   Normalize Split:   POST http://{addr}/api/nutrition/splits/normalize");
    info!("   Macro Goals:       POST http://{addr}/api/nutrition/macros");
    info!("   Intake Progress:   POST http://{addr}/api/nutrition/progress");
    info!("=== End of Endpoint List ===");
}
