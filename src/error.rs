//! Gateway error types and their HTTP mapping.
//!
//! Four caller-facing outcomes, kept distinguishable by status code:
//! unknown publisher token (400), resource not found (404), operation not
//! implemented by the resolved publisher (501), and downstream failure (502).

use crate::backend::AdapterError;
use crate::model::Publisher;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Caller-facing errors.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The publisher path segment matched no known backend.  Raised by the
    /// registry before any adapter is consulted.
    #[error("unknown publisher '{0}'")]
    UnknownPublisher(String),

    /// The backend supports the lookup and reported the id missing.
    #[error("{what} '{id}' not found")]
    NotFound { what: &'static str, id: String },

    /// The resolved backend does not implement this operation.
    #[error("{publisher} does not support {operation}")]
    Unsupported {
        publisher: Publisher,
        operation: &'static str,
    },

    /// The downstream call failed for transport or server reasons.
    #[error("{publisher} backend unavailable: {detail}")]
    BackendUnavailable {
        publisher: Publisher,
        detail: String,
    },
}

impl From<AdapterError> for GatewayError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::Unsupported {
                publisher,
                operation,
            } => GatewayError::Unsupported {
                publisher,
                operation,
            },
            AdapterError::NotFound { what, id } => GatewayError::NotFound { what, id },
            AdapterError::Backend(e) => GatewayError::BackendUnavailable {
                publisher: e.publisher(),
                detail: e.to_string(),
            },
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            GatewayError::UnknownPublisher(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_PUBLISHER"),
            GatewayError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            GatewayError::Unsupported { .. } => {
                (StatusCode::NOT_IMPLEMENTED, "UNSUPPORTED_OPERATION")
            }
            GatewayError::BackendUnavailable { .. } => {
                (StatusCode::BAD_GATEWAY, "BACKEND_UNAVAILABLE")
            }
        };

        if status.is_server_error() {
            tracing::warn!(code, error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
