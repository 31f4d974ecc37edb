// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::sheets_repository::SheetsRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;
    tracing::info!(
        sheet_id_set = !config.sheets.sheet_id.is_empty(),
        cases_gid_set = !config.sheets.cases_gid.is_empty(),
        suspects_gid_set = !config.sheets.suspects_gid.is_empty(),
        seizures_gid_set = !config.sheets.seizures_gid.is_empty(),
        username = %config.credentials.username,
        fetch_timeout_secs = config.fetch_timeout.as_secs(),
        "configuration loaded"
    );

    // Create fetcher (infrastructure layer)
    let fetcher = Arc::new(SheetsRepository::new(config.fetch_timeout)?);

    // Create services (application layer)
    let dashboard_service = DashboardService::new(fetcher, config.sheets.clone());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        credentials: config.credentials.clone(),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "starting case-dashboard service");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
