//! Shared application state for the gateway server.

use crate::backend::PublisherRegistry;
use std::sync::Arc;

/// State shared across all request handlers.  The registry is immutable after
/// startup; the gateway holds no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Publisher token → adapter dispatch table.
    pub registry: Arc<PublisherRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<PublisherRegistry>) -> Self {
        Self { registry }
    }
}
