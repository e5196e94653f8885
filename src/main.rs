use axum::Extension;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

use crate::services::groups::GroupService;

mod config;
mod definitions;
mod http;
mod services;
mod utils;

/// The server version extracted from the Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    let config = config::load_config().unwrap_or_default();

    utils::logging::setup(config.logging);

    let groups = match GroupService::new() {
        Ok(value) => Arc::new(value),
        Err(err) => {
            error!("Failed to load seed group configs: {:?}", err);
            return;
        }
    };

    info!("Iron Trials Milestone Server v{}", VERSION);
    info!("Available groups: {:?}", groups.group_ids());
    info!("Sample URLs:");
    for group_id in groups.group_ids() {
        info!("  GET /api/iron-trials/milestones?groupId={}", group_id);
    }

    let router = http::routes::router().layer(Extension(groups));

    let addr = SocketAddr::new(config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(value) => value,
        Err(err) => {
            error!("Failed to bind HTTP server on {}: {:?}", addr, err);
            return;
        }
    };

    info!("Starting server on http://{}", addr);

    if let Err(err) = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            _ = signal::ctrl_c().await;
        })
        .await
    {
        error!("Error while running server: {:?}", err);
    }
}
