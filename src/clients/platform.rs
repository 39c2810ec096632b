//! Platform (subscription) API client.

use serde_json::Value;

use super::{ClientResult, Message, Session};

/// Default platform API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://platform.vestaboard.com";

const API_KEY_HEADER: &str = "X-Vestaboard-Api-Key";
const API_SECRET_HEADER: &str = "X-Vestaboard-Api-Secret";

/// Client for the cloud platform API.
///
/// Requests are authenticated with an API key and secret.
#[derive(Debug, Clone)]
pub struct Client {
    session: Session,
}

impl Client {
    /// Create a client for the default endpoint.
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        Self::with_session(Session::new(DEFAULT_BASE_URL), api_key, api_secret)
    }

    /// Create a client on top of an existing session.
    pub fn with_session(session: Session, api_key: &str, api_secret: &str) -> Self {
        let session = session
            .with_header(API_KEY_HEADER, api_key)
            .with_header(API_SECRET_HEADER, api_secret);
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// List all subscriptions the viewer has access to.
    pub fn get_subscriptions(&self) -> ClientResult<Vec<Value>> {
        let response = Session::error_for_status(self.session.get("/subscriptions")?)?;
        let body: Value = serde_json::from_slice(&response.body)?;
        Ok(body
            .get("subscriptions")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    /// Describe the currently authenticated viewer.
    pub fn get_viewer(&self) -> ClientResult<Value> {
        let response = Session::error_for_status(self.session.get("/viewer")?)?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Post a new message to a subscription.
    ///
    /// Text messages are laid out by the service. Character grids must be
    /// 6 x 22 and are checked before anything is sent.
    pub fn post_message(
        &self,
        subscription_id: &str,
        message: impl Into<Message>,
    ) -> ClientResult<Value> {
        let message = message.into();
        message.validate()?;

        let path = format!("/subscriptions/{}/message", subscription_id);
        let response = Session::error_for_status(self.session.post_json(&path, &message)?)?;
        Ok(serde_json::from_slice(&response.body)?)
    }
}
