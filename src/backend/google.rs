//! Google-side adapter: a read-heavy, bulk-listing backend.
//!
//! This backend exposes filterable bulk listings only — no by-id lookups and
//! no write API through this integration.  The by-id account read is emulated
//! by listing and filtering locally; every write and every other by-id lookup
//! is a deliberate capability gap reported as `Unsupported`.

use crate::backend::wire::{
    AccountsEnvelope, AdsEnvelope, CampaignsEnvelope, GroupsEnvelope, KeywordsEnvelope,
};
use crate::backend::{
    AdFilter, AdapterResult, BackendError, CampaignFilter, GroupFilter, KeywordFilter,
    PublisherAdapter,
};
use crate::model::{Account, Ad, AdGroup, Campaign, Keyword, Publisher};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Base path the upstream plugin serves its API under.
const API_PREFIX: &str = "/public/api/pubgateway";

// ─────────────────────────────────────────────────────────────────────────────
// Downstream client contract
// ─────────────────────────────────────────────────────────────────────────────

/// The five bulk-listing calls the backend offers.  A trait so adapter tests
/// can substitute canned responses for the HTTP client.
#[async_trait]
pub trait GoogleAdsClient: Send + Sync {
    async fn get_accounts(&self) -> Result<AccountsEnvelope, BackendError>;
    async fn get_campaigns(&self, filter: &CampaignFilter)
    -> Result<CampaignsEnvelope, BackendError>;
    async fn get_ad_groups(&self, filter: &GroupFilter) -> Result<GroupsEnvelope, BackendError>;
    async fn get_ads(&self, filter: &AdFilter) -> Result<AdsEnvelope, BackendError>;
    async fn get_keywords(&self, filter: &KeywordFilter)
    -> Result<KeywordsEnvelope, BackendError>;
}

/// Reqwest-backed [`GoogleAdsClient`].
pub struct HttpGoogleAdsClient {
    base_url: String,
    client: Client,
}

impl HttpGoogleAdsClient {
    /// `base_url` is the plugin host (e.g. `http://google-pubgateway:8080`);
    /// the API prefix is appended per call.  `timeout` bounds every
    /// downstream call — there is no retry.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build reqwest client");
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError> {
        let url = format!("{}{}{}", self.base_url, API_PREFIX, path);
        debug!(url = %url, "calling google backend");

        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| BackendError::Transport {
                publisher: Publisher::Google,
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                publisher: Publisher::Google,
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map_err(|e| BackendError::Decode {
            publisher: Publisher::Google,
            detail: e.to_string(),
        })
    }
}

/// Collect present filter values into query pairs, dropping absent ones so
/// the backend never sees empty parameters.
fn query_pairs<'a>(pairs: &'a [(&'static str, &'a Option<String>)]) -> Vec<(&'static str, &'a str)> {
    pairs
        .iter()
        .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
        .collect()
}

#[async_trait]
impl GoogleAdsClient for HttpGoogleAdsClient {
    async fn get_accounts(&self) -> Result<AccountsEnvelope, BackendError> {
        self.get_json("/account", &[]).await
    }

    async fn get_campaigns(
        &self,
        filter: &CampaignFilter,
    ) -> Result<CampaignsEnvelope, BackendError> {
        let pairs = [
            ("customerId", &filter.account_id),
            ("status", &filter.status),
            ("nameContains", &filter.name_contains),
            ("channelType", &filter.channel_type),
            ("startDateFrom", &filter.start_date_from),
            ("startDateTo", &filter.start_date_to),
        ];
        let query = query_pairs(&pairs);
        self.get_json("/campaigns", &query).await
    }

    async fn get_ad_groups(&self, filter: &GroupFilter) -> Result<GroupsEnvelope, BackendError> {
        let pairs = [
            ("customerId", &filter.account_id),
            ("adGroupName", &filter.name_contains),
            ("status", &filter.status),
            ("campaignId", &filter.campaign_id),
        ];
        let query = query_pairs(&pairs);
        self.get_json("/groups", &query).await
    }

    async fn get_ads(&self, filter: &AdFilter) -> Result<AdsEnvelope, BackendError> {
        let pairs = [
            ("customerId", &filter.account_id),
            ("adGroupId", &filter.ad_group_id),
            ("status", &filter.status),
            ("textContains", &filter.text_contains),
        ];
        let query = query_pairs(&pairs);
        self.get_json("/ads", &query).await
    }

    async fn get_keywords(&self, filter: &KeywordFilter) -> Result<KeywordsEnvelope, BackendError> {
        let pairs = [
            ("customerId", &filter.account_id),
            ("adGroupId", &filter.ad_group_id),
            ("status", &filter.status),
            ("matchType", &filter.match_type),
            ("textContains", &filter.text_contains),
        ];
        let query = query_pairs(&pairs);
        self.get_json("/keywords", &query).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Read-heavy adapter over [`GoogleAdsClient`].
pub struct GoogleAdapter {
    client: Arc<dyn GoogleAdsClient>,
}

impl GoogleAdapter {
    pub fn new(client: Arc<dyn GoogleAdsClient>) -> Self {
        Self { client }
    }
}

/// account_id present and non-empty, or `None` to short-circuit the list.
fn required_account(account_id: &Option<String>) -> Option<&str> {
    account_id.as_deref().filter(|s| !s.is_empty())
}

#[async_trait]
impl PublisherAdapter for GoogleAdapter {
    fn publisher(&self) -> Publisher {
        Publisher::Google
    }

    // ── Accounts ────────────────────────────────────────────────────────────

    async fn get_account(&self, id: &str) -> AdapterResult<Vec<Account>> {
        // No by-id endpoint upstream: list everything, filter locally.  A
        // miss is an empty vector — the filter made no promise the id exists.
        let envelope = self.client.get_accounts().await?;
        Ok(envelope
            .accounts
            .into_iter()
            .map(|w| w.into_canonical(Publisher::Google))
            .filter(|a| a.id == id)
            .collect())
    }

    async fn create_account(&self, _account: Account) -> AdapterResult<Account> {
        Err(self.unsupported("create account"))
    }

    async fn update_account(&self, _id: &str, _account: Account) -> AdapterResult<Account> {
        Err(self.unsupported("update account"))
    }

    async fn delete_account(&self, _id: &str) -> AdapterResult<()> {
        Err(self.unsupported("delete account"))
    }

    // ── Campaigns ───────────────────────────────────────────────────────────

    async fn list_campaigns(&self, filter: CampaignFilter) -> AdapterResult<Vec<Campaign>> {
        let Some(account_id) = required_account(&filter.account_id).map(str::to_string) else {
            return Ok(Vec::new());
        };
        let envelope = self.client.get_campaigns(&filter).await?;
        // The backend does not echo the customer id back; force it alongside
        // the publisher tag.
        Ok(envelope
            .campaigns
            .into_iter()
            .map(|w| {
                let mut campaign = w.into_canonical(Publisher::Google);
                campaign.account_id = Some(account_id.clone());
                campaign
            })
            .collect())
    }

    async fn get_campaign(&self, _id: &str) -> AdapterResult<Campaign> {
        Err(self.unsupported("get campaign by id"))
    }

    async fn create_campaign(&self, _campaign: Campaign) -> AdapterResult<Campaign> {
        Err(self.unsupported("create campaign"))
    }

    async fn update_campaign(&self, _id: &str, _campaign: Campaign) -> AdapterResult<Campaign> {
        Err(self.unsupported("update campaign"))
    }

    async fn delete_campaign(&self, _id: &str) -> AdapterResult<()> {
        Err(self.unsupported("delete campaign"))
    }

    // ── Ad groups ───────────────────────────────────────────────────────────

    async fn list_groups(&self, filter: GroupFilter) -> AdapterResult<Vec<AdGroup>> {
        let Some(account_id) = required_account(&filter.account_id).map(str::to_string) else {
            return Ok(Vec::new());
        };
        let envelope = self.client.get_ad_groups(&filter).await?;
        Ok(envelope
            .ad_groups
            .into_iter()
            .map(|w| {
                let mut group = w.into_canonical(Publisher::Google);
                group.account_id.get_or_insert_with(|| account_id.clone());
                group
            })
            .collect())
    }

    async fn get_group(&self, _id: &str) -> AdapterResult<AdGroup> {
        Err(self.unsupported("get ad group by id"))
    }

    async fn create_group(&self, _group: AdGroup) -> AdapterResult<AdGroup> {
        Err(self.unsupported("create ad group"))
    }

    async fn update_group(&self, _id: &str, _group: AdGroup) -> AdapterResult<AdGroup> {
        Err(self.unsupported("update ad group"))
    }

    async fn delete_group(&self, _id: &str) -> AdapterResult<()> {
        Err(self.unsupported("delete ad group"))
    }

    // ── Ads ─────────────────────────────────────────────────────────────────

    async fn list_ads(&self, filter: AdFilter) -> AdapterResult<Vec<Ad>> {
        let Some(account_id) = required_account(&filter.account_id).map(str::to_string) else {
            return Ok(Vec::new());
        };
        let envelope = self.client.get_ads(&filter).await?;
        Ok(envelope
            .ads
            .into_iter()
            .map(|w| {
                let mut ad = w.into_canonical(Publisher::Google);
                ad.account_id.get_or_insert_with(|| account_id.clone());
                ad
            })
            .collect())
    }

    async fn get_ad(&self, _id: &str) -> AdapterResult<Ad> {
        Err(self.unsupported("get ad by id"))
    }

    async fn create_ad(&self, _ad: Ad) -> AdapterResult<Ad> {
        Err(self.unsupported("create ad"))
    }

    async fn update_ad(&self, _id: &str, _ad: Ad) -> AdapterResult<Ad> {
        Err(self.unsupported("update ad"))
    }

    async fn delete_ad(&self, _id: &str) -> AdapterResult<()> {
        Err(self.unsupported("delete ad"))
    }

    // ── Keywords ────────────────────────────────────────────────────────────

    async fn list_keywords(&self, filter: KeywordFilter) -> AdapterResult<Vec<Keyword>> {
        let Some(account_id) = required_account(&filter.account_id).map(str::to_string) else {
            return Ok(Vec::new());
        };
        let envelope = self.client.get_keywords(&filter).await?;
        Ok(envelope
            .keywords
            .into_iter()
            .map(|w| {
                let mut keyword = w.into_canonical(Publisher::Google);
                keyword.account_id.get_or_insert_with(|| account_id.clone());
                keyword
            })
            .collect())
    }

    async fn get_keyword(&self, _id: &str) -> AdapterResult<Keyword> {
        Err(self.unsupported("get keyword by id"))
    }

    async fn create_keyword(&self, _keyword: Keyword) -> AdapterResult<Keyword> {
        Err(self.unsupported("create keyword"))
    }

    async fn update_keyword(&self, _id: &str, _keyword: Keyword) -> AdapterResult<Keyword> {
        Err(self.unsupported("update keyword"))
    }

    async fn delete_keyword(&self, _id: &str) -> AdapterResult<()> {
        Err(self.unsupported("delete keyword"))
    }
}
