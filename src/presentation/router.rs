// Router setup
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, root};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    // Mirrors the caller's origin instead of sending `*`, which browsers
    // refuse when credentials are allowed.
    let cors = CorsLayer::very_permissive();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
