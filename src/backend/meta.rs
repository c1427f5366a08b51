//! Meta-side adapter: a CRUD-capable backend.
//!
//! Accounts, campaigns, ad groups, and ads delegate nearly 1:1 to the
//! backend; the adapter's only added behavior is stamping the publisher
//! discriminator onto outbound write bodies and every entity coming back.
//! The backend has no keyword concept, so the whole keyword resource is a
//! capability gap.

use crate::backend::wire::{WireAccount, WireAd, WireCampaign, WireGroup};
use crate::backend::{
    AdFilter, AdapterError, AdapterResult, BackendError, CampaignFilter, GroupFilter,
    KeywordFilter, PublisherAdapter,
};
use crate::model::{Account, Ad, AdGroup, Campaign, Keyword, Publisher};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Base path the upstream plugin serves its API under.
const API_PREFIX: &str = "/api";

// ─────────────────────────────────────────────────────────────────────────────
// Downstream client contract
// ─────────────────────────────────────────────────────────────────────────────

/// Per-entity CRUD calls the backend offers.  By-id reads, updates, and
/// deletes answer `None`/`false` when the backend reports the id unknown, so
/// the adapter can distinguish "missing" from transport failure.
#[async_trait]
pub trait MetaAdsClient: Send + Sync {
    async fn get_account(&self, id: &str) -> Result<Option<WireAccount>, BackendError>;
    async fn create_account(&self, body: &WireAccount) -> Result<WireAccount, BackendError>;
    async fn update_account(
        &self,
        id: &str,
        body: &WireAccount,
    ) -> Result<Option<WireAccount>, BackendError>;
    async fn delete_account(&self, id: &str) -> Result<bool, BackendError>;

    async fn get_campaigns(&self, account_id: Option<&str>)
    -> Result<Vec<WireCampaign>, BackendError>;
    async fn get_campaign(&self, id: &str) -> Result<Option<WireCampaign>, BackendError>;
    async fn create_campaign(&self, body: &WireCampaign) -> Result<WireCampaign, BackendError>;
    async fn update_campaign(
        &self,
        id: &str,
        body: &WireCampaign,
    ) -> Result<Option<WireCampaign>, BackendError>;
    async fn delete_campaign(&self, id: &str) -> Result<bool, BackendError>;

    async fn get_groups(
        &self,
        account_id: Option<&str>,
        campaign_id: Option<&str>,
    ) -> Result<Vec<WireGroup>, BackendError>;
    async fn get_group(&self, id: &str) -> Result<Option<WireGroup>, BackendError>;
    async fn create_group(&self, body: &WireGroup) -> Result<WireGroup, BackendError>;
    async fn update_group(
        &self,
        id: &str,
        body: &WireGroup,
    ) -> Result<Option<WireGroup>, BackendError>;
    async fn delete_group(&self, id: &str) -> Result<bool, BackendError>;

    async fn get_ads(
        &self,
        account_id: Option<&str>,
        ad_group_id: Option<&str>,
    ) -> Result<Vec<WireAd>, BackendError>;
    async fn get_ad(&self, id: &str) -> Result<Option<WireAd>, BackendError>;
    async fn create_ad(&self, body: &WireAd) -> Result<WireAd, BackendError>;
    async fn update_ad(&self, id: &str, body: &WireAd) -> Result<Option<WireAd>, BackendError>;
    async fn delete_ad(&self, id: &str) -> Result<bool, BackendError>;
}

/// Reqwest-backed [`MetaAdsClient`].
pub struct HttpMetaAdsClient {
    base_url: String,
    client: Client,
}

impl HttpMetaAdsClient {
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

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn transport(e: reqwest::Error) -> BackendError {
        BackendError::Transport {
            publisher: Publisher::Meta,
            source: e,
        }
    }

    fn status_err(status: StatusCode) -> BackendError {
        BackendError::Status {
            publisher: Publisher::Meta,
            status: status.as_u16(),
        }
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, BackendError> {
        resp.json::<T>().await.map_err(|e| BackendError::Decode {
            publisher: Publisher::Meta,
            detail: e.to_string(),
        })
    }

    /// GET a by-id resource; 404 becomes `None`.
    async fn get_opt<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, BackendError> {
        let url = self.url(path);
        debug!(url = %url, "calling meta backend");
        let resp = self.client.get(&url).send().await.map_err(Self::transport)?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => Ok(Some(Self::decode(resp).await?)),
            s => Err(Self::status_err(s)),
        }
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, BackendError> {
        let url = self.url(path);
        debug!(url = %url, "calling meta backend");
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(Self::transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::status_err(status));
        }
        Self::decode(resp).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let url = self.url(path);
        debug!(url = %url, "calling meta backend");
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(Self::transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::status_err(status));
        }
        Self::decode(resp).await
    }

    /// PUT a by-id resource; 404 becomes `None`.
    async fn put_opt<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, BackendError> {
        let url = self.url(path);
        debug!(url = %url, "calling meta backend");
        let resp = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(Self::transport)?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => Ok(Some(Self::decode(resp).await?)),
            s => Err(Self::status_err(s)),
        }
    }

    /// DELETE a by-id resource; `false` when the backend never had the id.
    async fn delete_opt(&self, path: &str) -> Result<bool, BackendError> {
        let url = self.url(path);
        debug!(url = %url, "calling meta backend");
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(Self::transport)?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(false),
            s if s.is_success() => Ok(true),
            s => Err(Self::status_err(s)),
        }
    }
}

fn present<'a>(pairs: &'a [(&'static str, Option<&'a str>)]) -> Vec<(&'static str, &'a str)> {
    pairs.iter().filter_map(|(k, v)| v.map(|v| (*k, v))).collect()
}

#[async_trait]
impl MetaAdsClient for HttpMetaAdsClient {
    async fn get_account(&self, id: &str) -> Result<Option<WireAccount>, BackendError> {
        self.get_opt(&format!("/accounts/{id}")).await
    }

    async fn create_account(&self, body: &WireAccount) -> Result<WireAccount, BackendError> {
        self.post("/accounts", body).await
    }

    async fn update_account(
        &self,
        id: &str,
        body: &WireAccount,
    ) -> Result<Option<WireAccount>, BackendError> {
        self.put_opt(&format!("/accounts/{id}"), body).await
    }

    async fn delete_account(&self, id: &str) -> Result<bool, BackendError> {
        self.delete_opt(&format!("/accounts/{id}")).await
    }

    async fn get_campaigns(
        &self,
        account_id: Option<&str>,
    ) -> Result<Vec<WireCampaign>, BackendError> {
        let pairs = [("accountId", account_id)];
        let query = present(&pairs);
        self.get_list("/campaigns", &query).await
    }

    async fn get_campaign(&self, id: &str) -> Result<Option<WireCampaign>, BackendError> {
        self.get_opt(&format!("/campaigns/{id}")).await
    }

    async fn create_campaign(&self, body: &WireCampaign) -> Result<WireCampaign, BackendError> {
        self.post("/campaigns", body).await
    }

    async fn update_campaign(
        &self,
        id: &str,
        body: &WireCampaign,
    ) -> Result<Option<WireCampaign>, BackendError> {
        self.put_opt(&format!("/campaigns/{id}"), body).await
    }

    async fn delete_campaign(&self, id: &str) -> Result<bool, BackendError> {
        self.delete_opt(&format!("/campaigns/{id}")).await
    }

    async fn get_groups(
        &self,
        account_id: Option<&str>,
        campaign_id: Option<&str>,
    ) -> Result<Vec<WireGroup>, BackendError> {
        let pairs = [("customerId", account_id), ("campaignId", campaign_id)];
        let query = present(&pairs);
        self.get_list("/groups", &query).await
    }

    async fn get_group(&self, id: &str) -> Result<Option<WireGroup>, BackendError> {
        self.get_opt(&format!("/groups/{id}")).await
    }

    async fn create_group(&self, body: &WireGroup) -> Result<WireGroup, BackendError> {
        self.post("/groups", body).await
    }

    async fn update_group(
        &self,
        id: &str,
        body: &WireGroup,
    ) -> Result<Option<WireGroup>, BackendError> {
        self.put_opt(&format!("/groups/{id}"), body).await
    }

    async fn delete_group(&self, id: &str) -> Result<bool, BackendError> {
        self.delete_opt(&format!("/groups/{id}")).await
    }

    async fn get_ads(
        &self,
        account_id: Option<&str>,
        ad_group_id: Option<&str>,
    ) -> Result<Vec<WireAd>, BackendError> {
        let pairs = [("customerId", account_id), ("adGroupId", ad_group_id)];
        let query = present(&pairs);
        self.get_list("/ads", &query).await
    }

    async fn get_ad(&self, id: &str) -> Result<Option<WireAd>, BackendError> {
        self.get_opt(&format!("/ads/{id}")).await
    }

    async fn create_ad(&self, body: &WireAd) -> Result<WireAd, BackendError> {
        self.post("/ads", body).await
    }

    async fn update_ad(&self, id: &str, body: &WireAd) -> Result<Option<WireAd>, BackendError> {
        self.put_opt(&format!("/ads/{id}"), body).await
    }

    async fn delete_ad(&self, id: &str) -> Result<bool, BackendError> {
        self.delete_opt(&format!("/ads/{id}")).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapter
// ─────────────────────────────────────────────────────────────────────────────

/// CRUD adapter over [`MetaAdsClient`].
pub struct MetaAdapter {
    client: Arc<dyn MetaAdsClient>,
}

impl MetaAdapter {
    pub fn new(client: Arc<dyn MetaAdsClient>) -> Self {
        Self { client }
    }

    fn not_found(what: &'static str, id: &str) -> AdapterError {
        AdapterError::NotFound {
            what,
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl PublisherAdapter for MetaAdapter {
    fn publisher(&self) -> Publisher {
        Publisher::Meta
    }

    // ── Accounts ────────────────────────────────────────────────────────────

    async fn get_account(&self, id: &str) -> AdapterResult<Vec<Account>> {
        // Direct by-id call, wrapped as a one-element list so the account
        // read stays list-shaped across all publishers.
        match self.client.get_account(id).await? {
            Some(wire) => Ok(vec![wire.into_canonical(Publisher::Meta)]),
            None => Err(Self::not_found("account", id)),
        }
    }

    async fn create_account(&self, account: Account) -> AdapterResult<Account> {
        let body = WireAccount::from_canonical(&account, Publisher::Meta);
        let created = self.client.create_account(&body).await?;
        Ok(created.into_canonical(Publisher::Meta))
    }

    async fn update_account(&self, id: &str, account: Account) -> AdapterResult<Account> {
        let body = WireAccount::from_canonical(&account, Publisher::Meta);
        match self.client.update_account(id, &body).await? {
            Some(updated) => Ok(updated.into_canonical(Publisher::Meta)),
            None => Err(Self::not_found("account", id)),
        }
    }

    async fn delete_account(&self, id: &str) -> AdapterResult<()> {
        if self.client.delete_account(id).await? {
            Ok(())
        } else {
            Err(Self::not_found("account", id))
        }
    }

    // ── Campaigns ───────────────────────────────────────────────────────────

    async fn list_campaigns(&self, filter: CampaignFilter) -> AdapterResult<Vec<Campaign>> {
        let campaigns = self
            .client
            .get_campaigns(filter.account_id.as_deref())
            .await?;
        Ok(campaigns
            .into_iter()
            .map(|w| w.into_canonical(Publisher::Meta))
            .collect())
    }

    async fn get_campaign(&self, id: &str) -> AdapterResult<Campaign> {
        match self.client.get_campaign(id).await? {
            Some(wire) => Ok(wire.into_canonical(Publisher::Meta)),
            None => Err(Self::not_found("campaign", id)),
        }
    }

    async fn create_campaign(&self, campaign: Campaign) -> AdapterResult<Campaign> {
        let body = WireCampaign::from_canonical(&campaign, Publisher::Meta);
        let created = self.client.create_campaign(&body).await?;
        Ok(created.into_canonical(Publisher::Meta))
    }

    async fn update_campaign(&self, id: &str, campaign: Campaign) -> AdapterResult<Campaign> {
        let body = WireCampaign::from_canonical(&campaign, Publisher::Meta);
        match self.client.update_campaign(id, &body).await? {
            Some(updated) => Ok(updated.into_canonical(Publisher::Meta)),
            None => Err(Self::not_found("campaign", id)),
        }
    }

    async fn delete_campaign(&self, id: &str) -> AdapterResult<()> {
        if self.client.delete_campaign(id).await? {
            Ok(())
        } else {
            Err(Self::not_found("campaign", id))
        }
    }

    // ── Ad groups ───────────────────────────────────────────────────────────

    async fn list_groups(&self, filter: GroupFilter) -> AdapterResult<Vec<AdGroup>> {
        let groups = self
            .client
            .get_groups(filter.account_id.as_deref(), filter.campaign_id.as_deref())
            .await?;
        Ok(groups
            .into_iter()
            .map(|w| w.into_canonical(Publisher::Meta))
            .collect())
    }

    async fn get_group(&self, id: &str) -> AdapterResult<AdGroup> {
        match self.client.get_group(id).await? {
            Some(wire) => Ok(wire.into_canonical(Publisher::Meta)),
            None => Err(Self::not_found("ad group", id)),
        }
    }

    async fn create_group(&self, group: AdGroup) -> AdapterResult<AdGroup> {
        let body = WireGroup::from_canonical(&group, Publisher::Meta);
        let created = self.client.create_group(&body).await?;
        Ok(created.into_canonical(Publisher::Meta))
    }

    async fn update_group(&self, id: &str, group: AdGroup) -> AdapterResult<AdGroup> {
        let body = WireGroup::from_canonical(&group, Publisher::Meta);
        match self.client.update_group(id, &body).await? {
            Some(updated) => Ok(updated.into_canonical(Publisher::Meta)),
            None => Err(Self::not_found("ad group", id)),
        }
    }

    async fn delete_group(&self, id: &str) -> AdapterResult<()> {
        if self.client.delete_group(id).await? {
            Ok(())
        } else {
            Err(Self::not_found("ad group", id))
        }
    }

    // ── Ads ─────────────────────────────────────────────────────────────────

    async fn list_ads(&self, filter: AdFilter) -> AdapterResult<Vec<Ad>> {
        let ads = self
            .client
            .get_ads(filter.account_id.as_deref(), filter.ad_group_id.as_deref())
            .await?;
        Ok(ads
            .into_iter()
            .map(|w| w.into_canonical(Publisher::Meta))
            .collect())
    }

    async fn get_ad(&self, id: &str) -> AdapterResult<Ad> {
        match self.client.get_ad(id).await? {
            Some(wire) => Ok(wire.into_canonical(Publisher::Meta)),
            None => Err(Self::not_found("ad", id)),
        }
    }

    async fn create_ad(&self, ad: Ad) -> AdapterResult<Ad> {
        let body = WireAd::from_canonical(&ad, Publisher::Meta);
        let created = self.client.create_ad(&body).await?;
        Ok(created.into_canonical(Publisher::Meta))
    }

    async fn update_ad(&self, id: &str, ad: Ad) -> AdapterResult<Ad> {
        let body = WireAd::from_canonical(&ad, Publisher::Meta);
        match self.client.update_ad(id, &body).await? {
            Some(updated) => Ok(updated.into_canonical(Publisher::Meta)),
            None => Err(Self::not_found("ad", id)),
        }
    }

    async fn delete_ad(&self, id: &str) -> AdapterResult<()> {
        if self.client.delete_ad(id).await? {
            Ok(())
        } else {
            Err(Self::not_found("ad", id))
        }
    }

    // ── Keywords ────────────────────────────────────────────────────────────

    async fn list_keywords(&self, _filter: KeywordFilter) -> AdapterResult<Vec<Keyword>> {
        Err(self.unsupported("list keywords"))
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
