//! Keyword endpoints.
//!
//! GET    /keywords       - list, filterable by accountId (alias customerId),
//!                          adGroupId, status, matchType, textContains
//! GET    /keywords/{id}  - by-id read
//! POST   /keywords       - create
//! PUT    /keywords/{id}  - update
//! DELETE /keywords/{id}  - delete
//!
//! Only the search-ads backend has a keyword concept; every keyword call on
//! other publishers answers 501.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::backend::KeywordFilter;
use crate::error::GatewayResult;
use crate::model::Keyword;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordListQuery {
    #[serde(alias = "customerId")]
    pub account_id: Option<String>,
    pub ad_group_id: Option<String>,
    pub status: Option<String>,
    pub match_type: Option<String>,
    pub text_contains: Option<String>,
}

impl From<KeywordListQuery> for KeywordFilter {
    fn from(q: KeywordListQuery) -> Self {
        KeywordFilter {
            account_id: q.account_id,
            ad_group_id: q.ad_group_id,
            status: q.status,
            match_type: q.match_type,
            text_contains: q.text_contains,
        }
    }
}

pub async fn list_keywords(
    State(state): State<Arc<AppState>>,
    Path(publisher): Path<String>,
    Query(query): Query<KeywordListQuery>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let keywords = adapter.list_keywords(query.into()).await?;
    Ok(Json(keywords))
}

pub async fn get_keyword(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let keyword = adapter.get_keyword(&id).await?;
    Ok(Json(keyword))
}

pub async fn create_keyword(
    State(state): State<Arc<AppState>>,
    Path(publisher): Path<String>,
    Json(keyword): Json<Keyword>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let created = adapter.create_keyword(keyword).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_keyword(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
    Json(keyword): Json<Keyword>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let updated = adapter.update_keyword(&id, keyword).await?;
    Ok(Json(updated))
}

pub async fn delete_keyword(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    adapter.delete_keyword(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/keywords", get(list_keywords).post(create_keyword))
        .route(
            "/keywords/{id}",
            get(get_keyword).put(update_keyword).delete(delete_keyword),
        )
}
