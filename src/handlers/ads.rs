//! Ad endpoints.
//!
//! GET    /ads       - list, filterable by accountId, adGroupId, status,
//!                     textContains
//! GET    /ads/{id}  - by-id read
//! POST   /ads       - create
//! PUT    /ads/{id}  - update
//! DELETE /ads/{id}  - delete

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::backend::AdFilter;
use crate::error::GatewayResult;
use crate::model::Ad;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdListQuery {
    #[serde(alias = "customerId")]
    pub account_id: Option<String>,
    #[serde(alias = "groupId")]
    pub ad_group_id: Option<String>,
    pub status: Option<String>,
    pub text_contains: Option<String>,
}

impl From<AdListQuery> for AdFilter {
    fn from(q: AdListQuery) -> Self {
        AdFilter {
            account_id: q.account_id,
            ad_group_id: q.ad_group_id,
            status: q.status,
            text_contains: q.text_contains,
        }
    }
}

pub async fn list_ads(
    State(state): State<Arc<AppState>>,
    Path(publisher): Path<String>,
    Query(query): Query<AdListQuery>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let ads = adapter.list_ads(query.into()).await?;
    Ok(Json(ads))
}

pub async fn get_ad(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let ad = adapter.get_ad(&id).await?;
    Ok(Json(ad))
}

pub async fn create_ad(
    State(state): State<Arc<AppState>>,
    Path(publisher): Path<String>,
    Json(ad): Json<Ad>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let created = adapter.create_ad(ad).await?;
    tracing::info!(publisher = %adapter.publisher(), ad_id = %created.id, "ad created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_ad(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
    Json(ad): Json<Ad>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let updated = adapter.update_ad(&id, ad).await?;
    Ok(Json(updated))
}

pub async fn delete_ad(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    adapter.delete_ad(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/ads", get(list_ads).post(create_ad))
        .route("/ads/{id}", get(get_ad).put(update_ad).delete(delete_ad))
}
