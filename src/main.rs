//! Publisher normalization gateway — entry point.
//!
//! Reads configuration from environment variables and starts the axum-based
//! HTTP service.
//!
//! # Environment variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GATEWAY_PORT` | `8080` | TCP port to listen on. |
//! | `GOOGLE_GATEWAY_URL` | `http://localhost:8081` | Search-ads backend base URL. |
//! | `META_GATEWAY_URL` | `http://localhost:8082` | Social-ads backend base URL. |
//! | `DOWNSTREAM_TIMEOUT_SECS` | `30` | Timeout for every downstream call. |

use pubgateway::server::{GatewayServer, GatewayServerConfig};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pubgateway=info".parse().unwrap()),
        )
        .init();

    let port: u16 = std::env::var("GATEWAY_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);

    let google_base_url = std::env::var("GOOGLE_GATEWAY_URL")
        .unwrap_or_else(|_| "http://localhost:8081".to_string());
    let meta_base_url =
        std::env::var("META_GATEWAY_URL").unwrap_or_else(|_| "http://localhost:8082".to_string());

    let timeout_secs: u64 = std::env::var("DOWNSTREAM_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);

    let server = GatewayServer::new(GatewayServerConfig {
        port,
        google_base_url,
        meta_base_url,
        downstream_timeout: Duration::from_secs(timeout_secs),
    });

    if let Err(e) = server.start().await {
        tracing::error!(error = %e, "gateway server exited");
        std::process::exit(1);
    }
}
