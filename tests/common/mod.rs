//! Mock backend clients shared by the integration tests.
//!
//! Both mocks count every downstream call so tests can assert that certain
//! paths (unknown publisher, missing required filter) never reach a backend.

#![allow(dead_code)]

use async_trait::async_trait;
use pubgateway::backend::wire::*;
use pubgateway::backend::{
    AdFilter, BackendError, CampaignFilter, GoogleAdsClient, GroupFilter, KeywordFilter,
    MetaAdsClient,
};
use pubgateway::model::Publisher;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// ─────────────────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────────────────

pub fn wire_account(id: &str, name: &str) -> WireAccount {
    WireAccount {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        status: Some("ENABLED".to_string()),
        currency: Some("USD".to_string()),
        timezone: Some("America/New_York".to_string()),
        ..WireAccount::default()
    }
}

pub fn wire_campaign(id: &str, name: &str) -> WireCampaign {
    WireCampaign {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        status: Some("ENABLED".to_string()),
        channel_type: Some("SEARCH".to_string()),
        ..WireCampaign::default()
    }
}

pub fn wire_group(id: &str, name: &str) -> WireGroup {
    WireGroup {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        status: Some("PAUSED".to_string()),
        ..WireGroup::default()
    }
}

pub fn wire_ad(id: &str, name: &str) -> WireAd {
    WireAd {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        status: Some("ENABLED".to_string()),
        ..WireAd::default()
    }
}

pub fn wire_keyword(id: &str, text: &str) -> WireKeyword {
    WireKeyword {
        id: Some(id.to_string()),
        text: Some(text.to_string()),
        match_type: Some("EXACT".to_string()),
        status: Some("ENABLED".to_string()),
        ..WireKeyword::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Google mock: canned bulk listings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockGoogleClient {
    pub accounts: Vec<WireAccount>,
    pub campaigns: Vec<WireCampaign>,
    pub groups: Vec<WireGroup>,
    pub ads: Vec<WireAd>,
    pub keywords: Vec<WireKeyword>,
    pub calls: AtomicUsize,
    pub last_keyword_filter: Mutex<Option<KeywordFilter>>,
    /// When set, every call fails with this HTTP status instead of answering.
    pub fail_with: Option<u16>,
}

impl MockGoogleClient {
    pub fn with_accounts(accounts: Vec<WireAccount>) -> Self {
        Self {
            accounts,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tick(&self) -> Result<(), BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(status) => Err(BackendError::Status {
                publisher: Publisher::Google,
                status,
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GoogleAdsClient for MockGoogleClient {
    async fn get_accounts(&self) -> Result<AccountsEnvelope, BackendError> {
        self.tick()?;
        Ok(AccountsEnvelope {
            accounts: self.accounts.clone(),
        })
    }

    async fn get_campaigns(
        &self,
        _filter: &CampaignFilter,
    ) -> Result<CampaignsEnvelope, BackendError> {
        self.tick()?;
        Ok(CampaignsEnvelope {
            campaigns: self.campaigns.clone(),
        })
    }

    async fn get_ad_groups(&self, _filter: &GroupFilter) -> Result<GroupsEnvelope, BackendError> {
        self.tick()?;
        Ok(GroupsEnvelope {
            ad_groups: self.groups.clone(),
        })
    }

    async fn get_ads(&self, _filter: &AdFilter) -> Result<AdsEnvelope, BackendError> {
        self.tick()?;
        Ok(AdsEnvelope {
            ads: self.ads.clone(),
        })
    }

    async fn get_keywords(&self, filter: &KeywordFilter) -> Result<KeywordsEnvelope, BackendError> {
        self.tick()?;
        *self.last_keyword_filter.lock().unwrap() = Some(filter.clone());
        Ok(KeywordsEnvelope {
            keywords: self.keywords.clone(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Meta mock: stateful in-memory CRUD store
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MetaStore {
    pub accounts: HashMap<String, WireAccount>,
    pub campaigns: HashMap<String, WireCampaign>,
    pub groups: HashMap<String, WireGroup>,
    pub ads: HashMap<String, WireAd>,
    next_id: u64,
}

impl MetaStore {
    fn assign_id(&mut self) -> String {
        self.next_id += 1;
        format!("9000{}", self.next_id)
    }
}

#[derive(Default)]
pub struct MockMetaClient {
    pub store: Mutex<MetaStore>,
    pub calls: AtomicUsize,
    /// When set, every call fails with this HTTP status instead of answering.
    pub fail_with: Option<u16>,
}

impl MockMetaClient {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seed_account(&self, account: WireAccount) {
        let id = account.id.clone().unwrap_or_default();
        self.store.lock().unwrap().accounts.insert(id, account);
    }

    pub fn seed_campaign(&self, campaign: WireCampaign) {
        let id = campaign.id.clone().unwrap_or_default();
        self.store.lock().unwrap().campaigns.insert(id, campaign);
    }

    fn tick(&self) -> Result<(), BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(status) => Err(BackendError::Status {
                publisher: Publisher::Meta,
                status,
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MetaAdsClient for MockMetaClient {
    async fn get_account(&self, id: &str) -> Result<Option<WireAccount>, BackendError> {
        self.tick()?;
        Ok(self.store.lock().unwrap().accounts.get(id).cloned())
    }

    async fn create_account(&self, body: &WireAccount) -> Result<WireAccount, BackendError> {
        self.tick()?;
        let mut store = self.store.lock().unwrap();
        let mut created = body.clone();
        created.id = Some(store.assign_id());
        store
            .accounts
            .insert(created.id.clone().unwrap(), created.clone());
        Ok(created)
    }

    async fn update_account(
        &self,
        id: &str,
        body: &WireAccount,
    ) -> Result<Option<WireAccount>, BackendError> {
        self.tick()?;
        let mut store = self.store.lock().unwrap();
        if !store.accounts.contains_key(id) {
            return Ok(None);
        }
        let mut updated = body.clone();
        updated.id = Some(id.to_string());
        store.accounts.insert(id.to_string(), updated.clone());
        Ok(Some(updated))
    }

    async fn delete_account(&self, id: &str) -> Result<bool, BackendError> {
        self.tick()?;
        Ok(self.store.lock().unwrap().accounts.remove(id).is_some())
    }

    async fn get_campaigns(
        &self,
        account_id: Option<&str>,
    ) -> Result<Vec<WireCampaign>, BackendError> {
        self.tick()?;
        let store = self.store.lock().unwrap();
        Ok(store
            .campaigns
            .values()
            .filter(|c| account_id.is_none() || c.account_id.as_deref() == account_id)
            .cloned()
            .collect())
    }

    async fn get_campaign(&self, id: &str) -> Result<Option<WireCampaign>, BackendError> {
        self.tick()?;
        Ok(self.store.lock().unwrap().campaigns.get(id).cloned())
    }

    async fn create_campaign(&self, body: &WireCampaign) -> Result<WireCampaign, BackendError> {
        self.tick()?;
        let mut store = self.store.lock().unwrap();
        let mut created = body.clone();
        created.id = Some(store.assign_id());
        store
            .campaigns
            .insert(created.id.clone().unwrap(), created.clone());
        Ok(created)
    }

    async fn update_campaign(
        &self,
        id: &str,
        body: &WireCampaign,
    ) -> Result<Option<WireCampaign>, BackendError> {
        self.tick()?;
        let mut store = self.store.lock().unwrap();
        if !store.campaigns.contains_key(id) {
            return Ok(None);
        }
        let mut updated = body.clone();
        updated.id = Some(id.to_string());
        store.campaigns.insert(id.to_string(), updated.clone());
        Ok(Some(updated))
    }

    async fn delete_campaign(&self, id: &str) -> Result<bool, BackendError> {
        self.tick()?;
        Ok(self.store.lock().unwrap().campaigns.remove(id).is_some())
    }

    async fn get_groups(
        &self,
        account_id: Option<&str>,
        campaign_id: Option<&str>,
    ) -> Result<Vec<WireGroup>, BackendError> {
        self.tick()?;
        let store = self.store.lock().unwrap();
        Ok(store
            .groups
            .values()
            .filter(|g| account_id.is_none() || g.account_id.as_deref() == account_id)
            .filter(|g| campaign_id.is_none() || g.campaign_id.as_deref() == campaign_id)
            .cloned()
            .collect())
    }

    async fn get_group(&self, id: &str) -> Result<Option<WireGroup>, BackendError> {
        self.tick()?;
        Ok(self.store.lock().unwrap().groups.get(id).cloned())
    }

    async fn create_group(&self, body: &WireGroup) -> Result<WireGroup, BackendError> {
        self.tick()?;
        let mut store = self.store.lock().unwrap();
        let mut created = body.clone();
        created.id = Some(store.assign_id());
        store
            .groups
            .insert(created.id.clone().unwrap(), created.clone());
        Ok(created)
    }

    async fn update_group(
        &self,
        id: &str,
        body: &WireGroup,
    ) -> Result<Option<WireGroup>, BackendError> {
        self.tick()?;
        let mut store = self.store.lock().unwrap();
        if !store.groups.contains_key(id) {
            return Ok(None);
        }
        let mut updated = body.clone();
        updated.id = Some(id.to_string());
        store.groups.insert(id.to_string(), updated.clone());
        Ok(Some(updated))
    }

    async fn delete_group(&self, id: &str) -> Result<bool, BackendError> {
        self.tick()?;
        Ok(self.store.lock().unwrap().groups.remove(id).is_some())
    }

    async fn get_ads(
        &self,
        account_id: Option<&str>,
        ad_group_id: Option<&str>,
    ) -> Result<Vec<WireAd>, BackendError> {
        self.tick()?;
        let store = self.store.lock().unwrap();
        Ok(store
            .ads
            .values()
            .filter(|a| account_id.is_none() || a.account_id.as_deref() == account_id)
            .filter(|a| ad_group_id.is_none() || a.ad_group_id.as_deref() == ad_group_id)
            .cloned()
            .collect())
    }

    async fn get_ad(&self, id: &str) -> Result<Option<WireAd>, BackendError> {
        self.tick()?;
        Ok(self.store.lock().unwrap().ads.get(id).cloned())
    }

    async fn create_ad(&self, body: &WireAd) -> Result<WireAd, BackendError> {
        self.tick()?;
        let mut store = self.store.lock().unwrap();
        let mut created = body.clone();
        created.id = Some(store.assign_id());
        store.ads.insert(created.id.clone().unwrap(), created.clone());
        Ok(created)
    }

    async fn update_ad(&self, id: &str, body: &WireAd) -> Result<Option<WireAd>, BackendError> {
        self.tick()?;
        let mut store = self.store.lock().unwrap();
        if !store.ads.contains_key(id) {
            return Ok(None);
        }
        let mut updated = body.clone();
        updated.id = Some(id.to_string());
        store.ads.insert(id.to_string(), updated.clone());
        Ok(Some(updated))
    }

    async fn delete_ad(&self, id: &str) -> Result<bool, BackendError> {
        self.tick()?;
        Ok(self.store.lock().unwrap().ads.remove(id).is_some())
    }
}
