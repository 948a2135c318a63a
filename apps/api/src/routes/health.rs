use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and stored session count.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let sessions = state.store.session_count().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "review-api",
        "sessions": sessions
    }))
}
