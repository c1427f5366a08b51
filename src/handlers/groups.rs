//! Ad-group endpoints.
//!
//! GET    /groups       - list, filterable by accountId, campaignId, status,
//!                        nameContains
//! GET    /groups/{id}  - by-id read
//! POST   /groups       - create
//! PUT    /groups/{id}  - update
//! DELETE /groups/{id}  - delete

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::backend::GroupFilter;
use crate::error::GatewayResult;
use crate::model::AdGroup;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupListQuery {
    #[serde(alias = "customerId")]
    pub account_id: Option<String>,
    pub campaign_id: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "adGroupName")]
    pub name_contains: Option<String>,
}

impl From<GroupListQuery> for GroupFilter {
    fn from(q: GroupListQuery) -> Self {
        GroupFilter {
            account_id: q.account_id,
            campaign_id: q.campaign_id,
            status: q.status,
            name_contains: q.name_contains,
        }
    }
}

pub async fn list_groups(
    State(state): State<Arc<AppState>>,
    Path(publisher): Path<String>,
    Query(query): Query<GroupListQuery>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let groups = adapter.list_groups(query.into()).await?;
    Ok(Json(groups))
}

pub async fn get_group(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let group = adapter.get_group(&id).await?;
    Ok(Json(group))
}

pub async fn create_group(
    State(state): State<Arc<AppState>>,
    Path(publisher): Path<String>,
    Json(group): Json<AdGroup>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let created = adapter.create_group(group).await?;
    tracing::info!(publisher = %adapter.publisher(), group_id = %created.id, "ad group created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_group(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
    Json(group): Json<AdGroup>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let updated = adapter.update_group(&id, group).await?;
    Ok(Json(updated))
}

pub async fn delete_group(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    adapter.delete_group(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/groups", get(list_groups).post(create_group))
        .route(
            "/groups/{id}",
            get(get_group).put(update_group).delete(delete_group),
        )
}
