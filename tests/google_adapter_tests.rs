//! Behavior of the read-heavy (bulk-listing) adapter: by-id emulation,
//! required-by-policy filters, and discriminator tagging.

mod common;

use common::{MockGoogleClient, wire_account, wire_campaign, wire_keyword};
use pubgateway::backend::{
    AdapterError, CampaignFilter, GoogleAdapter, KeywordFilter, PublisherAdapter,
};
use pubgateway::model::{EntityStatus, Publisher};
use std::sync::Arc;

fn adapter_with(client: MockGoogleClient) -> (GoogleAdapter, Arc<MockGoogleClient>) {
    let client = Arc::new(client);
    (GoogleAdapter::new(client.clone()), client)
}

#[tokio::test]
async fn account_read_filters_bulk_listing_by_id() {
    let (adapter, client) = adapter_with(MockGoogleClient::with_accounts(vec![
        wire_account("123", "Acme"),
        wire_account("456", "Globex"),
    ]));

    let accounts = adapter.get_account("123").await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, "123");
    assert_eq!(accounts[0].name, "Acme");
    assert_eq!(accounts[0].publisher, Some(Publisher::Google));
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn account_read_miss_is_empty_not_an_error() {
    let (adapter, _client) = adapter_with(MockGoogleClient::with_accounts(vec![wire_account(
        "456", "Globex",
    )]));

    let accounts = adapter.get_account("123").await.unwrap();
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn campaign_list_without_account_id_skips_the_backend() {
    let (adapter, client) = adapter_with(MockGoogleClient::default());

    let campaigns = adapter
        .list_campaigns(CampaignFilter::default())
        .await
        .unwrap();
    assert!(campaigns.is_empty());
    assert_eq!(client.call_count(), 0);

    // An empty (as opposed to absent) account id short-circuits too.
    let campaigns = adapter
        .list_campaigns(CampaignFilter {
            account_id: Some(String::new()),
            ..CampaignFilter::default()
        })
        .await
        .unwrap();
    assert!(campaigns.is_empty());
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn campaign_list_forces_publisher_and_account_id() {
    let client = MockGoogleClient {
        campaigns: vec![wire_campaign("11", "Spring"), wire_campaign("12", "Summer")],
        ..MockGoogleClient::default()
    };
    let (adapter, _client) = adapter_with(client);

    let campaigns = adapter
        .list_campaigns(CampaignFilter {
            account_id: Some("777".into()),
            ..CampaignFilter::default()
        })
        .await
        .unwrap();

    assert_eq!(campaigns.len(), 2);
    for campaign in &campaigns {
        // The backend never echoes the customer id back.
        assert_eq!(campaign.account_id.as_deref(), Some("777"));
        assert_eq!(campaign.publisher, Some(Publisher::Google));
    }
    assert_eq!(campaigns[0].status, EntityStatus::Active);
}

#[tokio::test]
async fn backend_supplied_publisher_is_ignored() {
    let mut spoofed = wire_account("123", "Acme");
    spoofed.publisher = Some("META".to_string());
    let (adapter, _client) = adapter_with(MockGoogleClient::with_accounts(vec![spoofed]));

    let accounts = adapter.get_account("123").await.unwrap();
    assert_eq!(accounts[0].publisher, Some(Publisher::Google));
}

#[tokio::test]
async fn keyword_filters_are_forwarded_verbatim() {
    let client = MockGoogleClient {
        keywords: vec![wire_keyword("1", "running shoes")],
        ..MockGoogleClient::default()
    };
    let (adapter, client) = adapter_with(client);

    let filter = KeywordFilter {
        account_id: Some("777".into()),
        ad_group_id: Some("42".into()),
        status: Some("ENABLED".into()),
        match_type: Some("EXACT".into()),
        text_contains: Some("shoes".into()),
    };
    let keywords = adapter.list_keywords(filter.clone()).await.unwrap();

    assert_eq!(keywords.len(), 1);
    assert_eq!(keywords[0].publisher, Some(Publisher::Google));
    let seen = client.last_keyword_filter.lock().unwrap().clone();
    assert_eq!(seen, Some(filter));
}

#[tokio::test]
async fn backend_failure_is_an_error_not_an_empty_list() {
    let client = MockGoogleClient {
        fail_with: Some(503),
        ..MockGoogleClient::default()
    };
    let (adapter, _client) = adapter_with(client);

    let result = adapter
        .list_campaigns(CampaignFilter {
            account_id: Some("777".into()),
            ..CampaignFilter::default()
        })
        .await;
    assert!(matches!(result, Err(AdapterError::Backend(_))));

    let result = adapter.get_account("123").await;
    assert!(matches!(result, Err(AdapterError::Backend(_))));
}

#[tokio::test]
async fn identical_filters_yield_identical_output() {
    let client = MockGoogleClient {
        campaigns: vec![wire_campaign("11", "Spring")],
        ..MockGoogleClient::default()
    };
    let (adapter, _client) = adapter_with(client);

    let filter = CampaignFilter {
        account_id: Some("777".into()),
        status: Some("ENABLED".into()),
        ..CampaignFilter::default()
    };
    let first = adapter.list_campaigns(filter.clone()).await.unwrap();
    let second = adapter.list_campaigns(filter).await.unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
