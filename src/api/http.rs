//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use super::rest::analyze;
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Analysis endpoint
        .route("/analyze", post(analyze::analyze_text))
        .layer(cors)
        .with_state(state)
}

/// Health check response body
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    word_levels_loaded: bool,
    word_count: usize,
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        word_levels_loaded: state.word_count() > 0,
        word_count: state.word_count(),
    })
}
