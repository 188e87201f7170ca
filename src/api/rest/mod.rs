//! REST API module for HTTP endpoints
//!
//! Provides the transport-facing endpoints, thin adapters over the core:
//! - `POST /analyze` - Analyze a text and return per-word levels
//! - `GET /health` - Service health and level table status

pub mod analyze;

use serde::Serialize;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
