//! Backend adapters — the capability contract and its implementations.
//!
//! [`PublisherAdapter`] defines one method per resource operation.  A valid
//! adapter may legitimately implement only a subset: an unsupported operation
//! is a typed [`AdapterError::Unsupported`] result, enumerable in advance per
//! (publisher, resource, operation), never a panic or a silent empty success.
//!
//! Concrete adapters translate between the canonical model and one backend's
//! wire shapes; no backend shape leaves this module.

mod google;
mod meta;
mod registry;
pub mod wire;

pub use google::{GoogleAdapter, GoogleAdsClient, HttpGoogleAdsClient};
pub use meta::{HttpMetaAdsClient, MetaAdapter, MetaAdsClient};
pub use registry::PublisherRegistry;

use crate::model::{Account, Ad, AdGroup, Campaign, Keyword, Publisher};
use async_trait::async_trait;
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Downstream transport/protocol failure.  Always surfaced to the caller,
/// never converted into an empty result.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never completed (connect failure, timeout, …).
    #[error("transport error talking to {publisher}: {source}")]
    Transport {
        publisher: Publisher,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status the adapter does not
    /// give a more specific meaning to.
    #[error("{publisher} backend returned HTTP {status}")]
    Status { publisher: Publisher, status: u16 },

    /// The backend answered 2xx but the body did not decode.
    #[error("{publisher} backend returned an undecodable body: {detail}")]
    Decode { publisher: Publisher, detail: String },
}

impl BackendError {
    pub fn publisher(&self) -> Publisher {
        match self {
            BackendError::Transport { publisher, .. }
            | BackendError::Status { publisher, .. }
            | BackendError::Decode { publisher, .. } => *publisher,
        }
    }
}

/// Outcome of a single adapter operation.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The backend has no implementation for this operation — a capability
    /// gap, not a runtime surprise.
    #[error("{publisher} does not support {operation}")]
    Unsupported {
        publisher: Publisher,
        operation: &'static str,
    },

    /// The backend supports by-id lookup and reported that this id does not
    /// exist.
    #[error("{what} '{id}' not found")]
    NotFound { what: &'static str, id: String },

    /// The downstream call itself failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub type AdapterResult<T> = Result<T, AdapterError>;

// ─────────────────────────────────────────────────────────────────────────────
// List filters
// ─────────────────────────────────────────────────────────────────────────────

/// Filters for campaign listing.  `account_id` is required by policy on the
/// read-heavy backend: when absent the adapter answers with an empty list
/// without contacting the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub account_id: Option<String>,
    pub status: Option<String>,
    pub name_contains: Option<String>,
    pub channel_type: Option<String>,
    pub start_date_from: Option<String>,
    pub start_date_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFilter {
    pub account_id: Option<String>,
    pub campaign_id: Option<String>,
    pub status: Option<String>,
    pub name_contains: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdFilter {
    pub account_id: Option<String>,
    pub ad_group_id: Option<String>,
    pub status: Option<String>,
    pub text_contains: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFilter {
    pub account_id: Option<String>,
    pub ad_group_id: Option<String>,
    pub status: Option<String>,
    pub match_type: Option<String>,
    pub text_contains: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// The adapter contract
// ─────────────────────────────────────────────────────────────────────────────

/// One backend's implementation of the uniform resource operation set.
///
/// Adapters are stateless and shared across concurrent requests behind an
/// `Arc`; every operation performs at most one downstream call.  List
/// operations never return [`AdapterError::NotFound`] — criteria that match
/// nothing (or a required-by-policy filter that is absent) yield an empty
/// vector.
#[async_trait]
pub trait PublisherAdapter: Send + Sync {
    /// The identity stamped onto every entity this adapter produces.
    fn publisher(&self) -> Publisher;

    // ── Accounts ────────────────────────────────────────────────────────────
    /// By-id account read, list-shaped: backends that can only list in bulk
    /// emulate this with a local id filter, so a miss is an empty vector for
    /// them and `NotFound` for backends with a real by-id call.
    async fn get_account(&self, id: &str) -> AdapterResult<Vec<Account>>;
    async fn create_account(&self, account: Account) -> AdapterResult<Account>;
    async fn update_account(&self, id: &str, account: Account) -> AdapterResult<Account>;
    async fn delete_account(&self, id: &str) -> AdapterResult<()>;

    // ── Campaigns ───────────────────────────────────────────────────────────
    async fn list_campaigns(&self, filter: CampaignFilter) -> AdapterResult<Vec<Campaign>>;
    async fn get_campaign(&self, id: &str) -> AdapterResult<Campaign>;
    async fn create_campaign(&self, campaign: Campaign) -> AdapterResult<Campaign>;
    async fn update_campaign(&self, id: &str, campaign: Campaign) -> AdapterResult<Campaign>;
    async fn delete_campaign(&self, id: &str) -> AdapterResult<()>;

    // ── Ad groups ───────────────────────────────────────────────────────────
    async fn list_groups(&self, filter: GroupFilter) -> AdapterResult<Vec<AdGroup>>;
    async fn get_group(&self, id: &str) -> AdapterResult<AdGroup>;
    async fn create_group(&self, group: AdGroup) -> AdapterResult<AdGroup>;
    async fn update_group(&self, id: &str, group: AdGroup) -> AdapterResult<AdGroup>;
    async fn delete_group(&self, id: &str) -> AdapterResult<()>;

    // ── Ads ─────────────────────────────────────────────────────────────────
    async fn list_ads(&self, filter: AdFilter) -> AdapterResult<Vec<Ad>>;
    async fn get_ad(&self, id: &str) -> AdapterResult<Ad>;
    async fn create_ad(&self, ad: Ad) -> AdapterResult<Ad>;
    async fn update_ad(&self, id: &str, ad: Ad) -> AdapterResult<Ad>;
    async fn delete_ad(&self, id: &str) -> AdapterResult<()>;

    // ── Keywords ────────────────────────────────────────────────────────────
    async fn list_keywords(&self, filter: KeywordFilter) -> AdapterResult<Vec<Keyword>>;
    async fn get_keyword(&self, id: &str) -> AdapterResult<Keyword>;
    async fn create_keyword(&self, keyword: Keyword) -> AdapterResult<Keyword>;
    async fn update_keyword(&self, id: &str, keyword: Keyword) -> AdapterResult<Keyword>;
    async fn delete_keyword(&self, id: &str) -> AdapterResult<()>;

    /// Build the capability-gap outcome for `operation`.
    fn unsupported(&self, operation: &'static str) -> AdapterError {
        tracing::debug!(publisher = %self.publisher(), operation, "operation not supported");
        AdapterError::Unsupported {
            publisher: self.publisher(),
            operation,
        }
    }
}
