//! Axum-based gateway server.
//!
//! [`GatewayServer`] wires the backend clients, adapters, registry, and
//! resource routers into a running axum service.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/health` | Liveness check — always `200 OK`. |
//! | `*`    | `/api/v1/publishers/{publisher}/accounts…` | Account operations. |
//! | `*`    | `/api/v1/publishers/{publisher}/campaigns…` | Campaign operations. |
//! | `*`    | `/api/v1/publishers/{publisher}/groups…` | Ad-group operations. |
//! | `*`    | `/api/v1/publishers/{publisher}/ads…` | Ad operations. |
//! | `*`    | `/api/v1/publishers/{publisher}/keywords…` | Keyword operations. |

use crate::backend::{
    GoogleAdapter, HttpGoogleAdsClient, HttpMetaAdsClient, MetaAdapter, PublisherRegistry,
};
use crate::handlers;
use crate::state::AppState;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Runtime configuration for [`GatewayServer`].
pub struct GatewayServerConfig {
    /// TCP port to listen on (default: 8080).
    pub port: u16,
    /// Base URL of the search-ads backend plugin.
    pub google_base_url: String,
    /// Base URL of the social-ads backend plugin.
    pub meta_base_url: String,
    /// Timeout applied to every downstream call.  There is no retry or
    /// backoff — a slow backend fails the one request that hit it.
    pub downstream_timeout: Duration,
}

impl Default for GatewayServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            google_base_url: "http://localhost:8081".to_string(),
            meta_base_url: "http://localhost:8082".to_string(),
            downstream_timeout: Duration::from_secs(30),
        }
    }
}

/// High-level gateway server encapsulating backend wiring and the router.
pub struct GatewayServer {
    config: GatewayServerConfig,
}

impl GatewayServer {
    pub fn new(config: GatewayServerConfig) -> Self {
        Self { config }
    }

    /// Build the axum [`Router`] with HTTP-backed adapters for both
    /// publishers.  Call [`start()`](Self::start) to bind and serve.
    pub fn build_app(&self) -> Router {
        let google = HttpGoogleAdsClient::new(
            self.config.google_base_url.clone(),
            self.config.downstream_timeout,
        );
        let meta = HttpMetaAdsClient::new(
            self.config.meta_base_url.clone(),
            self.config.downstream_timeout,
        );

        let mut registry = PublisherRegistry::new();
        registry
            .register(Arc::new(GoogleAdapter::new(Arc::new(google))))
            .register(Arc::new(MetaAdapter::new(Arc::new(meta))));

        Self::app_with_registry(registry)
    }

    /// Build the router over an already-populated registry.  Tests use this
    /// to serve mock-backed adapters through the real routing stack.
    pub fn app_with_registry(registry: PublisherRegistry) -> Router {
        let state = Arc::new(AppState::new(Arc::new(registry)));
        Router::new()
            .merge(handlers::health::router())
            .nest("/api/v1/publishers/{publisher}", handlers::api_router())
            .with_state(state)
    }

    /// Bind the configured port and serve until the task is cancelled.
    pub async fn start(&self) -> std::io::Result<()> {
        let app = self.build_app();
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(
            %addr,
            google = %self.config.google_base_url,
            meta = %self.config.meta_base_url,
            "publisher gateway listening"
        );
        axum::serve(listener, app).await
    }
}
