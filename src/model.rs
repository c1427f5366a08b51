//! Canonical, publisher-agnostic domain model.
//!
//! Every entity carries a `publisher` discriminator naming the backend that
//! produced it.  Adapters set the discriminator at construction time on every
//! read and write path; caller-supplied values are never trusted.
//!
//! Identifiers are opaque strings at the gateway boundary even when a
//! backend's native id is numeric — the gateway never interprets them.
//! Optional fields serialize as absent (not as `""` or `0`) so downstream
//! consumers cannot mistake "unreported" for "zero".

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Publisher discriminator
// ─────────────────────────────────────────────────────────────────────────────

/// The closed set of supported backend platforms.
///
/// Adding a publisher means adding a variant here, an adapter implementation,
/// and one `register` call — nothing else branches on publisher identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Publisher {
    /// Search-ads platform: bulk, filter-rich listing; no write API.
    Google,
    /// Social-ads platform: full per-entity CRUD; no keyword concept.
    Meta,
}

impl Publisher {
    pub const ALL: [Publisher; 2] = [Publisher::Google, Publisher::Meta];

    /// The discriminator value stamped onto canonical entities.
    pub fn as_str(&self) -> &'static str {
        match self {
            Publisher::Google => "GOOGLE",
            Publisher::Meta => "META",
        }
    }

    /// The path-segment token this publisher is addressed by.
    pub fn token(&self) -> &'static str {
        match self {
            Publisher::Google => "google",
            Publisher::Meta => "meta",
        }
    }

    /// Case-insensitive token parsing.  Returns `None` for anything outside
    /// the closed set — the caller decides how to report that.
    pub fn parse(token: &str) -> Option<Publisher> {
        Publisher::ALL
            .into_iter()
            .find(|p| p.token().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Closed vocabularies
// ─────────────────────────────────────────────────────────────────────────────

/// Configured status of any resource, normalized across backends.
///
/// Backend vocabularies differ (`ENABLED` vs `ACTIVE`, `REMOVED` vs
/// `DELETED`); anything unrecognized degrades to `Unknown` rather than
/// failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Paused,
    Removed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EntityStatus {
    /// Normalize a backend status string.
    pub fn from_wire(s: &str) -> EntityStatus {
        match s.to_ascii_uppercase().as_str() {
            "ENABLED" | "ACTIVE" => EntityStatus::Active,
            "PAUSED" => EntityStatus::Paused,
            "REMOVED" | "DELETED" | "ARCHIVED" => EntityStatus::Removed,
            _ => EntityStatus::Unknown,
        }
    }

    /// Backend-facing status string for outbound write bodies.
    pub fn as_wire(&self) -> &'static str {
        match self {
            EntityStatus::Active => "ACTIVE",
            EntityStatus::Paused => "PAUSED",
            EntityStatus::Removed => "REMOVED",
            EntityStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Keyword match type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Broad,
    Phrase,
    Exact,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MatchType {
    pub fn from_wire(s: &str) -> MatchType {
        match s.to_ascii_uppercase().as_str() {
            "BROAD" => MatchType::Broad,
            "PHRASE" => MatchType::Phrase,
            "EXACT" => MatchType::Exact,
            _ => MatchType::Unknown,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            MatchType::Broad => "BROAD",
            MatchType::Phrase => "PHRASE",
            MatchType::Exact => "EXACT",
            MatchType::Unknown => "UNKNOWN",
        }
    }
}

/// Campaign delivery channel, reported by channel-oriented backends.
/// Objective-oriented backends leave this unset and fill `objective` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Search,
    Display,
    Video,
    Social,
    #[serde(other)]
    Unknown,
}

impl ChannelType {
    pub fn as_wire(&self) -> &'static str {
        match self {
            ChannelType::Search => "SEARCH",
            ChannelType::Display => "DISPLAY",
            ChannelType::Video => "VIDEO",
            ChannelType::Social => "SOCIAL",
            ChannelType::Unknown => "UNKNOWN",
        }
    }

    pub fn from_wire(s: &str) -> ChannelType {
        match s.to_ascii_uppercase().as_str() {
            "SEARCH" => ChannelType::Search,
            "DISPLAY" => ChannelType::Display,
            "VIDEO" => ChannelType::Video,
            "SOCIAL" => ChannelType::Social,
            _ => ChannelType::Unknown,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entities
// ─────────────────────────────────────────────────────────────────────────────

/// Advertising account, possibly part of a manager-account hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Whether this is a manager (umbrella) account; not all backends report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<bool>,
    /// Depth in the manager-account hierarchy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    /// Linked client account id, for manager hierarchies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: EntityStatus,
    /// Backend-reported runtime state, distinct from the configured `status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<ChannelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidding_strategy_type: Option<String>,
    /// Campaign objective, for backends organized around objectives rather
    /// than delivery channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    /// Opaque budget reference — backends disagree on whether this is an id
    /// or a raw amount, so the gateway passes it through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdGroup {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ad_type: Option<String>,
    /// Opaque backend payload retained for display; never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creative_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_group_id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub match_type: MatchType,
    #[serde(default)]
    pub status: EntityStatus,
    /// Denormalized parent ad-group name, kept for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
}
