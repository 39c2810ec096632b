//! Local (LAN) API client.

use serde::Deserialize;
use tracing::info;

use super::{ClientError, ClientResult, Session};
use crate::chars::{validate_rows, Row, Rows};
use crate::http::Method;

/// Default local API endpoint.
pub const DEFAULT_BASE_URL: &str = "http://vestaboard.local:7000";

const API_KEY_HEADER: &str = "X-Vestaboard-Local-Api-Key";
const ENABLEMENT_TOKEN_HEADER: &str = "X-Vestaboard-Local-Api-Enablement-Token";

/// HTTP 201 Created, returned for accepted messages.
const STATUS_CREATED: u16 = 201;

#[derive(Debug, Deserialize)]
struct Enablement {
    #[serde(rename = "apiKey")]
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LocalMessage {
    message: Option<Rows>,
}

/// Client for a board's local API.
///
/// A local API key is required to read or write messages. It is obtained
/// once by calling [`LocalClient::enable`] with an enablement token, and can
/// be passed directly on later runs.
#[derive(Debug, Clone)]
pub struct LocalClient {
    session: Session,
}

impl LocalClient {
    pub fn new(api_key: Option<&str>) -> Self {
        Self::with_session(Session::new(DEFAULT_BASE_URL), api_key)
    }

    pub fn with_session(session: Session, api_key: Option<&str>) -> Self {
        let mut client = Self { session };
        if let Some(key) = api_key {
            client.set_api_key(key);
        }
        client
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The client's local API key, if set.
    pub fn api_key(&self) -> Option<&str> {
        self.session.header(API_KEY_HEADER)
    }

    pub fn set_api_key(&mut self, key: &str) {
        self.session.set_header(API_KEY_HEADER, key);
    }

    /// Whether an API key is set.
    pub fn enabled(&self) -> bool {
        self.api_key().is_some()
    }

    /// Enable the board's local API using an enablement token.
    ///
    /// On success the returned key is also stored on the client.
    pub fn enable(&mut self, enablement_token: &str) -> ClientResult<Option<String>> {
        let response = self.session.request(
            Method::Post,
            "/local-api/enablement",
            None,
            &[(ENABLEMENT_TOKEN_HEADER, enablement_token)],
        )?;
        let response = Session::error_for_status(response)?;

        let api_key = response
            .json::<Enablement>()
            .and_then(|e| e.api_key)
            .filter(|key| !key.is_empty());

        if let Some(key) = &api_key {
            self.set_api_key(key);
            info!("Local API enabled");
        }

        Ok(api_key)
    }

    /// Read the board's current message.
    pub fn read_message(&self) -> ClientResult<Option<Rows>> {
        self.require_enabled()?;
        let response = Session::error_for_status(self.session.get("/local-api/message")?)?;
        Ok(response.json::<LocalMessage>().and_then(|m| m.message))
    }

    /// Write a 6 x 22 grid of character codes to the board.
    ///
    /// Returns whether the board accepted the message.
    pub fn write_message(&self, rows: &[Row]) -> ClientResult<bool> {
        self.require_enabled()?;
        validate_rows(rows)?;
        let response =
            Session::error_for_status(self.session.post_json("/local-api/message", rows)?)?;
        Ok(response.status == STATUS_CREATED)
    }

    fn require_enabled(&self) -> ClientResult<()> {
        if self.enabled() {
            Ok(())
        } else {
            Err(ClientError::NotEnabled)
        }
    }
}
