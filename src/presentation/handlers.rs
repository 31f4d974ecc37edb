// HTTP request handlers
use crate::domain::dashboard::Dashboard;
use crate::presentation::app_state::AppState;
use crate::presentation::auth::RequireBasicAuth;
use crate::presentation::error::ApiError;
use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub endpoints: [&'static str; 2],
    pub note: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "Case Dashboard API",
        endpoints: ["/health", "/dashboard"],
        note: "Open /health to test. /dashboard requires Basic Auth.",
    })
}

/// Fetch all three sheets and return counts plus raw rows
pub async fn get_dashboard(
    _auth: RequireBasicAuth,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, ApiError> {
    let dashboard = state.dashboard_service.get_dashboard().await?;
    Ok(Json(dashboard))
}
