//! Analyze endpoint

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::ApiError;
use crate::api::state::AppState;
use crate::types::CefrLevel;

/// Request body for text analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The English text to analyze
    pub text: String,
    /// Minimum CEFR level for synonym suggestions (A1, A2, B1, B2, C1)
    #[serde(default = "default_min_level")]
    pub min_synonym_level: String,
}

fn default_min_level() -> String {
    "A2".to_string()
}

/// POST /analyze - Analyze text and return word levels with suggestions
///
/// The level tag is validated before analysis begins; anything other than
/// the five recognized tags is a caller error. Provider failures surface as
/// request-level failures with no partial result.
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let Some(min_level) = CefrLevel::from_str(&request.min_synonym_level) else {
        let error = ApiError::bad_request(format!(
            "unrecognized min_synonym_level '{}', expected one of A1, A2, B1, B2, C1",
            request.min_synonym_level
        ));
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    };

    match state.analyzer.analyze(&request.text, min_level) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => {
            tracing::error!("analysis failed: {e}");
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
