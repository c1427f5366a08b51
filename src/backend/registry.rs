//! Publisher token → adapter dispatch.
//!
//! The registry is the single place backends are registered and the only
//! component that branches on publisher identity.  Adapters are stateless, so
//! one shared instance per publisher serves all concurrent requests.

use crate::backend::PublisherAdapter;
use crate::error::GatewayError;
use crate::model::Publisher;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps the closed set of publisher tokens to shared adapter instances.
#[derive(Default)]
pub struct PublisherRegistry {
    adapters: HashMap<Publisher, Arc<dyn PublisherAdapter>>,
}

impl PublisherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under its own identity.  Registering the same
    /// publisher twice replaces the previous adapter.
    pub fn register(&mut self, adapter: Arc<dyn PublisherAdapter>) -> &mut Self {
        self.adapters.insert(adapter.publisher(), adapter);
        self
    }

    /// Resolve a free-form token case-insensitively.  Tokens outside the
    /// closed set (or without a registered adapter) are a client error; no
    /// adapter is ever consulted for them.
    pub fn resolve(&self, token: &str) -> Result<Arc<dyn PublisherAdapter>, GatewayError> {
        Publisher::parse(token)
            .and_then(|p| self.adapters.get(&p))
            .map(Arc::clone)
            .ok_or_else(|| GatewayError::UnknownPublisher(token.to_string()))
    }

    /// Publishers currently registered, for the readiness probe.
    pub fn publishers(&self) -> Vec<Publisher> {
        let mut all: Vec<Publisher> = self.adapters.keys().copied().collect();
        all.sort_by_key(|p| p.token());
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::GoogleAdapter;
    use crate::backend::google::GoogleAdsClient;
    use crate::backend::wire::*;
    use crate::backend::{AdFilter, BackendError, CampaignFilter, GroupFilter, KeywordFilter};
    use async_trait::async_trait;

    struct EmptyGoogle;

    #[async_trait]
    impl GoogleAdsClient for EmptyGoogle {
        async fn get_accounts(&self) -> Result<AccountsEnvelope, BackendError> {
            Ok(AccountsEnvelope::default())
        }
        async fn get_campaigns(
            &self,
            _filter: &CampaignFilter,
        ) -> Result<CampaignsEnvelope, BackendError> {
            Ok(CampaignsEnvelope::default())
        }
        async fn get_ad_groups(
            &self,
            _filter: &GroupFilter,
        ) -> Result<GroupsEnvelope, BackendError> {
            Ok(GroupsEnvelope::default())
        }
        async fn get_ads(&self, _filter: &AdFilter) -> Result<AdsEnvelope, BackendError> {
            Ok(AdsEnvelope::default())
        }
        async fn get_keywords(
            &self,
            _filter: &KeywordFilter,
        ) -> Result<KeywordsEnvelope, BackendError> {
            Ok(KeywordsEnvelope::default())
        }
    }

    fn registry_with_google() -> PublisherRegistry {
        let mut registry = PublisherRegistry::new();
        registry.register(Arc::new(GoogleAdapter::new(Arc::new(EmptyGoogle))));
        registry
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let registry = registry_with_google();
        assert!(registry.resolve("google").is_ok());
        assert!(registry.resolve("GOOGLE").is_ok());
        assert!(registry.resolve("GoOgLe").is_ok());
    }

    #[test]
    fn unknown_token_is_a_client_error() {
        let registry = registry_with_google();
        assert!(matches!(
            registry.resolve("bing"),
            Err(GatewayError::UnknownPublisher(t)) if t == "bing"
        ));
    }

    #[test]
    fn valid_token_without_registered_adapter_is_unknown() {
        let registry = registry_with_google();
        assert!(matches!(
            registry.resolve("meta"),
            Err(GatewayError::UnknownPublisher(_))
        ));
    }

    #[test]
    fn publishers_lists_registered_backends() {
        let registry = registry_with_google();
        assert_eq!(registry.publishers(), vec![Publisher::Google]);
    }
}
