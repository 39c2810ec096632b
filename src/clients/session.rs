//! Shared request state for API clients.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::{ClientError, ClientResult};
use crate::http::{find_header, CurlTransport, Method, Request, Response, Transport};

/// Base URL, default headers and transport shared by every request a client
/// makes.
#[derive(Clone)]
pub struct Session {
    base_url: String,
    headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
}

impl Session {
    /// Create a session that sends requests with `curl`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: Vec::new(),
            transport: Arc::new(CurlTransport::default()),
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    pub fn with_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.set_header(name, value);
        }
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a default header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Set a default header, replacing any existing value.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name, value)),
        }
    }

    /// Resolve `path` against the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Send a request and return the raw response, whatever its status.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        extra_headers: &[(&str, &str)],
    ) -> ClientResult<Response> {
        let mut headers = self.headers.clone();
        for (name, value) in extra_headers {
            match headers
                .iter_mut()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
            {
                Some(entry) => entry.1 = value.to_string(),
                None => headers.push((name.to_string(), value.to_string())),
            }
        }
        if body.is_some() && find_header(&headers, "Content-Type").is_none() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let request = Request {
            method,
            url: self.url(path),
            headers,
            body,
        };

        debug!(method = %request.method, url = %request.url, "Sending request");

        let response = self.transport.send(&request).map_err(|e| {
            warn!(method = %request.method, url = %request.url, error = %e, "Request failed");
            ClientError::from(e)
        })?;

        debug!(status = response.status, url = %request.url, "Received response");
        Ok(response)
    }

    pub fn get(&self, path: &str) -> ClientResult<Response> {
        self.request(Method::Get, path, None, &[])
    }

    /// POST `value` as compact JSON.
    pub fn post_json<T: Serialize + ?Sized>(&self, path: &str, value: &T) -> ClientResult<Response> {
        let body = serde_json::to_vec(value)?;
        self.request(Method::Post, path, Some(body), &[])
    }

    /// Turn 4xx and 5xx responses into [`ClientError::Status`].
    pub fn error_for_status(response: Response) -> ClientResult<Response> {
        if response.status >= 400 {
            warn!(status = response.status, "Remote rejected request");
            return Err(ClientError::Status {
                status: response.status,
                body: response.text(),
            });
        }
        Ok(response)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Header values carry credentials
        let names: Vec<&str> = self.headers.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("headers", &names)
            .finish()
    }
}
