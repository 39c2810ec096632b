//! HTTP request plumbing.
//!
//! Requests are plain values handed to a [`Transport`]. The default
//! transport ([`CurlTransport`]) runs the system `curl` program; tests and
//! embedding applications can supply their own.

mod curl;

pub use curl::CurlTransport;

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// HTTP request methods used by the board APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully resolved HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Absolute URL
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode the body as JSON, or `None` if it isn't valid JSON of type `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_slice(&self.body).ok()
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as (lossily decoded) text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Errors raised when a request could not be exchanged at all.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP transport not available: {0}")]
    NotAvailable(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request failed with exit code {code}: {}", .stderr.trim())]
    Failed { code: i32, stderr: String },

    #[error("Malformed transport output: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sends requests and returns responses.
///
/// Implementors must be thread-safe as one transport may be shared by
/// several clients.
pub trait Transport: Send + Sync {
    fn send(&self, request: &Request) -> Result<Response, TransportError>;
}

pub(crate) fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
