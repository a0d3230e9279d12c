// ABOUTME: Server binary for the recipe catalog service
// ABOUTME: Wires config, logging, database, and the HTTP listener with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

//! # Recipe Catalog Server Binary
//!
//! Starts the recipe catalog HTTP service: loads environment
//! configuration, initializes structured logging, migrates the database,
//! and serves the API until SIGINT/SIGTERM.

use anyhow::Result;
use clap::Parser;
use recipe_catalog_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    constants::defaults,
    database::Database,
    logging, routes,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-catalog-server")]
#[command(about = "Recipe catalog service - ordered listings, detail views, and submissions")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = &args.database_url {
        config.database.url = DatabaseUrl::parse_url(database_url)?;
    }

    logging::init_from_env()?;

    info!("Starting recipe catalog server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized and migrated");

    let app = routes::app_router(database)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            defaults::REQUEST_TIMEOUT_SECS,
        )));

    let address = format!("0.0.0.0:{}", config.http_port);
    let listener = TcpListener::bind(&address).await?;
    info!("Listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received terminate signal, shutting down"),
    }
}
