use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus which optional collaborators are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "kitgen",
        "style_backend": state.style_predictor.backend(),
        "image_search": state.config.unsplash_api_key.is_some(),
        "suggestions": state.llm.is_some()
    }))
}
