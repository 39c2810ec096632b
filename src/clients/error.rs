//! Client errors.
//!
//! Remote rejections (`Status`) are kept apart from local validation
//! failures (`Encoding`, `NotEnabled`) and from transport failures, so that
//! callers can decide which ones are worth retrying.

use crate::chars::EncodingError;
use crate::http::TransportError;
use thiserror::Error;

/// Errors from board API clients.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Remote rejected request with status {status}: {}", truncate_body(.body))]
    Status { status: u16, body: String },

    #[error("Local API has not been enabled")]
    NotEnabled,

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// The HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the remote asked us to slow down (HTTP 429).
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Truncate response bodies for display.
fn truncate_body(body: &str) -> String {
    const MAX_LEN: usize = 200;
    let body = body.trim();
    if body.chars().count() <= MAX_LEN {
        body.to_string()
    } else {
        let truncated: String = body.chars().take(MAX_LEN).collect();
        format!("{}...", truncated)
    }
}
