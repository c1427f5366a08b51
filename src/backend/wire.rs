//! Backend wire shapes and serde helpers.
//!
//! Both backends descend from the same upstream plugin family and speak
//! closely related JSON dialects (`descriptiveName`, `currencyCode`,
//! `advertisingChannelType`, numeric ids).  The structs here model that
//! dialect once; each adapter converts to/from the canonical model with the
//! conversion helpers, stamping its own publisher identity at construction
//! time.
//!
//! Ids arrive as JSON numbers or strings depending on backend and entity age;
//! [`opt_id`] normalizes both to `String`.

use crate::model::{
    Account, Ad, AdGroup, Campaign, ChannelType, EntityStatus, Keyword, MatchType, Publisher,
};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Deserialize an id field that may be a JSON number, a string, or absent.
fn opt_id<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(de)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

fn status_of(wire: &Option<String>) -> EntityStatus {
    wire.as_deref().map(EntityStatus::from_wire).unwrap_or_default()
}

fn none_if_empty(id: &str) -> Option<String> {
    if id.is_empty() { None } else { Some(id.to_string()) }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entities
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAccount {
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "descriptiveName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "currencyCode", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, rename = "timeZone", skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, rename = "clientCustomer", skip_serializing_if = "Option::is_none")]
    pub client_customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl WireAccount {
    pub fn into_canonical(self, publisher: Publisher) -> Account {
        Account {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            status: status_of(&self.status),
            currency: self.currency,
            timezone: self.timezone,
            manager: self.manager,
            level: self.level,
            client_customer: self.client_customer,
            publisher: Some(publisher),
        }
    }

    pub fn from_canonical(account: &Account, publisher: Publisher) -> WireAccount {
        WireAccount {
            id: none_if_empty(&account.id),
            name: Some(account.name.clone()),
            status: Some(account.status.as_wire().to_string()),
            currency: account.currency.clone(),
            timezone: account.timezone.clone(),
            manager: account.manager,
            level: account.level,
            client_customer: account.client_customer.clone(),
            publisher: Some(publisher.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCampaign {
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_score: Option<f64>,
    #[serde(default, rename = "advertisingChannelType", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidding_strategy_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl WireCampaign {
    pub fn into_canonical(self, publisher: Publisher) -> Campaign {
        Campaign {
            id: self.id.unwrap_or_default(),
            account_id: self.account_id,
            name: self.name.unwrap_or_default(),
            status: status_of(&self.status),
            serving_status: self.serving_status,
            start_date: self.start_date,
            end_date: self.end_date,
            optimization_score: self.optimization_score,
            channel_type: self.channel_type.as_deref().map(ChannelType::from_wire),
            bidding_strategy_type: self.bidding_strategy_type,
            objective: self.objective,
            budget: self.budget,
            publisher: Some(publisher),
        }
    }

    pub fn from_canonical(campaign: &Campaign, publisher: Publisher) -> WireCampaign {
        WireCampaign {
            id: none_if_empty(&campaign.id),
            account_id: campaign.account_id.clone(),
            name: Some(campaign.name.clone()),
            status: Some(campaign.status.as_wire().to_string()),
            serving_status: campaign.serving_status.clone(),
            start_date: campaign.start_date.clone(),
            end_date: campaign.end_date.clone(),
            optimization_score: campaign.optimization_score,
            channel_type: campaign.channel_type.map(|c| c.as_wire().to_string()),
            bidding_strategy_type: campaign.bidding_strategy_type.clone(),
            objective: campaign.objective.clone(),
            budget: campaign.budget.clone(),
            publisher: Some(publisher.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGroup {
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl WireGroup {
    pub fn into_canonical(self, publisher: Publisher) -> AdGroup {
        AdGroup {
            id: self.id.unwrap_or_default(),
            account_id: self.account_id,
            campaign_id: self.campaign_id,
            name: self.name.unwrap_or_default(),
            status: status_of(&self.status),
            group_type: self.group_type,
            bid_strategy: self.bid_strategy,
            publisher: Some(publisher),
        }
    }

    pub fn from_canonical(group: &AdGroup, publisher: Publisher) -> WireGroup {
        WireGroup {
            id: none_if_empty(&group.id),
            account_id: group.account_id.clone(),
            campaign_id: group.campaign_id.clone(),
            name: Some(group.name.clone()),
            status: Some(group.status.as_wire().to_string()),
            group_type: group.group_type.clone(),
            bid_strategy: group.bid_strategy.clone(),
            publisher: Some(publisher.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAd {
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub ad_group_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ad_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creative_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl WireAd {
    pub fn into_canonical(self, publisher: Publisher) -> Ad {
        Ad {
            id: self.id.unwrap_or_default(),
            account_id: self.account_id,
            ad_group_id: self.ad_group_id,
            campaign_id: self.campaign_id,
            name: self.name.unwrap_or_default(),
            status: status_of(&self.status),
            ad_type: self.ad_type,
            raw: self.raw,
            creative_url: self.creative_url,
            publisher: Some(publisher),
        }
    }

    pub fn from_canonical(ad: &Ad, publisher: Publisher) -> WireAd {
        WireAd {
            id: none_if_empty(&ad.id),
            account_id: ad.account_id.clone(),
            ad_group_id: ad.ad_group_id.clone(),
            campaign_id: ad.campaign_id.clone(),
            name: Some(ad.name.clone()),
            status: Some(ad.status.as_wire().to_string()),
            ad_type: ad.ad_type.clone(),
            raw: ad.raw.clone(),
            creative_url: ad.creative_url.clone(),
            publisher: Some(publisher.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireKeyword {
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id", skip_serializing_if = "Option::is_none")]
    pub ad_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl WireKeyword {
    pub fn into_canonical(self, publisher: Publisher) -> Keyword {
        Keyword {
            id: self.id.unwrap_or_default(),
            account_id: self.account_id,
            campaign_id: self.campaign_id,
            ad_group_id: self.ad_group_id,
            text: self.text.unwrap_or_default(),
            match_type: self.match_type.as_deref().map(MatchType::from_wire).unwrap_or_default(),
            status: status_of(&self.status),
            ad_group_name: self.ad_group_name,
            raw: self.raw,
            publisher: Some(publisher),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// List envelopes (bulk-listing backend wraps arrays in named objects)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountsEnvelope {
    #[serde(default)]
    pub accounts: Vec<WireAccount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampaignsEnvelope {
    #[serde(default)]
    pub campaigns: Vec<WireCampaign>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupsEnvelope {
    #[serde(default, rename = "adGroups")]
    pub ad_groups: Vec<WireGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdsEnvelope {
    #[serde(default)]
    pub ads: Vec<WireAd>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordsEnvelope {
    #[serde(default)]
    pub keywords: Vec<WireKeyword>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_both_normalize() {
        let a: WireAccount = serde_json::from_str(r#"{"id":1234567890}"#).unwrap();
        assert_eq!(a.id.as_deref(), Some("1234567890"));
        let b: WireAccount = serde_json::from_str(r#"{"id":"1234567890"}"#).unwrap();
        assert_eq!(b.id.as_deref(), Some("1234567890"));
        let c: WireAccount = serde_json::from_str(r#"{"id":null}"#).unwrap();
        assert_eq!(c.id, None);
    }

    #[test]
    fn account_envelope_decodes_backend_field_names() {
        let json = r#"{
            "accounts": [{
                "id": 123,
                "descriptiveName": "Acme Search",
                "status": "ENABLED",
                "currencyCode": "EUR",
                "timeZone": "Europe/Berlin",
                "manager": false,
                "level": 1
            }]
        }"#;
        let envelope: AccountsEnvelope = serde_json::from_str(json).unwrap();
        let account = envelope.accounts[0].clone().into_canonical(Publisher::Google);
        assert_eq!(account.id, "123");
        assert_eq!(account.name, "Acme Search");
        assert_eq!(account.status, EntityStatus::Active);
        assert_eq!(account.currency.as_deref(), Some("EUR"));
        assert_eq!(account.publisher, Some(Publisher::Google));
    }

    #[test]
    fn missing_envelope_key_yields_empty_list() {
        let envelope: CampaignsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.campaigns.is_empty());
    }

    #[test]
    fn campaign_channel_type_maps_into_closed_vocabulary() {
        let json = r#"{"id":"7","advertisingChannelType":"SEARCH","status":"PAUSED"}"#;
        let wire: WireCampaign = serde_json::from_str(json).unwrap();
        let campaign = wire.into_canonical(Publisher::Google);
        assert_eq!(campaign.channel_type, Some(ChannelType::Search));
        assert_eq!(campaign.status, EntityStatus::Paused);
    }

    #[test]
    fn outbound_body_carries_publisher_and_wire_status() {
        let campaign = Campaign {
            id: "55".into(),
            name: "Launch".into(),
            status: EntityStatus::Active,
            ..Campaign::default()
        };
        let wire = WireCampaign::from_canonical(&campaign, Publisher::Meta);
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["publisher"], "META");
        assert_eq!(json["status"], "ACTIVE");
        assert_eq!(json["id"], "55");
        assert!(json.get("budget").is_none());
    }
}
