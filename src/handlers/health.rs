//! Health check handlers

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{constants::ROOT_GREETING, error::AppResult, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness banner
async fn root() -> &'static str {
    ROOT_GREETING
}

/// Health check endpoint (round-trips to the store)
async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    state.store().ping().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
