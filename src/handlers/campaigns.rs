//! Campaign endpoints.
//!
//! GET    /campaigns       - list, filterable by accountId, status,
//!                           nameContains, channelType, startDateFrom/To
//! GET    /campaigns/{id}  - by-id read
//! POST   /campaigns       - create
//! PUT    /campaigns/{id}  - update
//! DELETE /campaigns/{id}  - delete

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::backend::CampaignFilter;
use crate::error::GatewayResult;
use crate::model::Campaign;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignListQuery {
    #[serde(alias = "customerId")]
    pub account_id: Option<String>,
    pub status: Option<String>,
    pub name_contains: Option<String>,
    pub channel_type: Option<String>,
    pub start_date_from: Option<String>,
    pub start_date_to: Option<String>,
}

impl From<CampaignListQuery> for CampaignFilter {
    fn from(q: CampaignListQuery) -> Self {
        CampaignFilter {
            account_id: q.account_id,
            status: q.status,
            name_contains: q.name_contains,
            channel_type: q.channel_type,
            start_date_from: q.start_date_from,
            start_date_to: q.start_date_to,
        }
    }
}

pub async fn list_campaigns(
    State(state): State<Arc<AppState>>,
    Path(publisher): Path<String>,
    Query(query): Query<CampaignListQuery>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let campaigns = adapter.list_campaigns(query.into()).await?;
    Ok(Json(campaigns))
}

pub async fn get_campaign(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let campaign = adapter.get_campaign(&id).await?;
    Ok(Json(campaign))
}

pub async fn create_campaign(
    State(state): State<Arc<AppState>>,
    Path(publisher): Path<String>,
    Json(campaign): Json<Campaign>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let created = adapter.create_campaign(campaign).await?;
    tracing::info!(publisher = %adapter.publisher(), campaign_id = %created.id, "campaign created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_campaign(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
    Json(campaign): Json<Campaign>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    let updated = adapter.update_campaign(&id, campaign).await?;
    Ok(Json(updated))
}

pub async fn delete_campaign(
    State(state): State<Arc<AppState>>,
    Path((publisher, id)): Path<(String, String)>,
) -> GatewayResult<impl IntoResponse> {
    let adapter = state.registry.resolve(&publisher)?;
    adapter.delete_campaign(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/campaigns", get(list_campaigns).post(create_campaign))
        .route(
            "/campaigns/{id}",
            get(get_campaign)
                .put(update_campaign)
                .delete(delete_campaign),
        )
}
