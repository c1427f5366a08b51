//! Account endpoints.
//!
//! GET    /accounts/{id}  - by-id read, list-shaped (bulk-only backends
//!                          emulate it by filtering, so the body is always
//!                          an array)
//! POST   /accounts       - create
//! PUT    /accounts/{id}  - update
//! DELETE /accounts/{id}  - delete

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;

use crate::error::GatewayResult;
use crate::model::Account;
use crate::state::AppState;

pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let accounts = adapter.get_account(&id).await?;
    Ok(Json(accounts))
}

pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Path(publisher): Path<String>,
    Json(account): Json<Account>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let created = adapter.create_account(account).await?;
    tracing::info!(publisher = %adapter.publisher(), account_id = %created.id, "account created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
    Json(account): Json<Account>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let updated = adapter.update_account(&id, account).await?;
    Ok(Json(updated))
}

pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    adapter.delete_account(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/accounts", post(create_account))
        .route(
            "/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
}
