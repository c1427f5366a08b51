//! `pubgateway` — publisher normalization gateway.
//!
//! One uniform resource API (accounts, campaigns, ad groups, ads, keywords)
//! over heterogeneous advertising-platform backends, selected at request
//! time by a publisher path segment.  Each backend exposes a different
//! capability set and wire schema; the gateway routes to the matching
//! [`backend::PublisherAdapter`], translates results into the canonical
//! [`model`], and reports capability gaps as uniform, typed outcomes instead
//! of leaking backend-specific failures.
//!
//! | Concern | Module |
//! |---------|--------|
//! | Canonical entities & discriminator | [`model`] |
//! | Adapter contract & implementations | [`backend`] |
//! | Token → adapter dispatch | [`backend::PublisherRegistry`] |
//! | HTTP handlers | [`handlers`] |
//! | Error → status mapping | [`error`] |
//! | Server wiring | [`server`] |
//!
//! # Quick start
//!
//! ```rust,no_run
//! use pubgateway::server::{GatewayServer, GatewayServerConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = GatewayServer::new(GatewayServerConfig {
//!         port: 8080,
//!         google_base_url: "http://google-pubgateway:8080".into(),
//!         meta_base_url: "http://meta-pubgateway:8080".into(),
//!         downstream_timeout: Duration::from_secs(30),
//!     });
//!     server.start().await.unwrap();
//! }
//! ```

pub mod backend;
pub mod error;
pub mod handlers;
pub mod model;
pub mod server;
pub mod state;
