// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::stats_fetcher::StatsFetcher;
use crate::infrastructure::config::load_config;
use crate::infrastructure::http_stats_source::HttpStatsSource;
use crate::infrastructure::token_store::FileTokenStore;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_config()?;

    // Create adapters (infrastructure layer)
    let source = Arc::new(HttpStatsSource::new(config.api.stats_endpoint.clone()));
    let credentials = Arc::new(FileTokenStore::new(&config.credentials.store_path));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(StatsFetcher::new(source, credentials));

    let state = Arc::new(AppState { dashboard_service });
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.listen_addr.parse()?;
    tracing::info!(
        stats_endpoint = %config.api.stats_endpoint,
        "Starting parking-dashboard service on {}",
        addr
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
