//! Request handlers — the dispatch boundary.
//!
//! Every handler resolves the publisher path segment through the registry
//! first; an unknown token is answered 400 without contacting any backend.
//! Adapter outcomes then map onto the uniform status set via
//! [`GatewayError`](crate::error::GatewayError).

pub mod accounts;
pub mod ads;
pub mod campaigns;
pub mod groups;
pub mod health;
pub mod keywords;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

/// Assemble the per-resource sub-routers nested under
/// `/api/v1/publishers/{publisher}`.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(accounts::router())
        .merge(campaigns::router())
        .merge(groups::router())
        .merge(ads::router())
        .merge(keywords::router())
}
