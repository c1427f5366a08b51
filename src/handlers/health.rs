//! Health check endpoint.
//!
//! GET /health - liveness probe; reports the registered publisher tokens.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;

/// GET /health
///
/// Always 200 while the process is alive.  The publisher list doubles as a
/// cheap smoke check that registry wiring happened at startup.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let publishers: Vec<&'static str> = state
        .registry
        .publishers()
        .iter()
        .map(|p| p.token())
        .collect();
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "publishers": publishers,
        })),
    )
}

/// Build the health router sub-tree.
pub fn router() -> axum::Router<Arc<AppState>> {
    use axum::routing::get;
    axum::Router::new().route("/health", get(health))
}
