//! Read/Write API client.

use serde::Deserialize;

use super::{ClientResult, Message, Session};
use crate::chars::Rows;

/// Default read/write API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://rw.vestaboard.com/";

const KEY_HEADER: &str = "X-Vestaboard-Read-Write-Key";

/// HTTP 200 OK, returned for accepted messages.
const STATUS_OK: u16 = 200;

#[derive(Debug, Deserialize)]
struct ReadResponse {
    #[serde(rename = "currentMessage")]
    current_message: Option<CurrentMessage>,
}

#[derive(Debug, Deserialize)]
struct CurrentMessage {
    /// JSON-encoded character grid
    layout: Option<String>,
}

/// Client for the cloud read/write API.
#[derive(Debug, Clone)]
pub struct ReadWriteClient {
    session: Session,
}

impl ReadWriteClient {
    pub fn new(read_write_key: &str) -> Self {
        Self::with_session(Session::new(DEFAULT_BASE_URL), read_write_key)
    }

    pub fn with_session(session: Session, read_write_key: &str) -> Self {
        Self {
            session: session.with_header(KEY_HEADER, read_write_key),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read the board's current message.
    pub fn read_message(&self) -> ClientResult<Option<Rows>> {
        let response = Session::error_for_status(self.session.get("")?)?;
        let layout = response
            .json::<ReadResponse>()
            .and_then(|r| r.current_message)
            .and_then(|m| m.layout);

        match layout {
            Some(layout) => Ok(Some(serde_json::from_str(&layout)?)),
            None => Ok(None),
        }
    }

    /// Write a message to the board.
    ///
    /// Returns whether the service accepted the message.
    pub fn write_message(&self, message: impl Into<Message>) -> ClientResult<bool> {
        let message = message.into();
        message.validate()?;

        let response = match &message {
            Message::Text(_) => self.session.post_json("", &message)?,
            Message::Characters(rows) => self.session.post_json("", rows)?,
        };
        let response = Session::error_for_status(response)?;
        Ok(response.status == STATUS_OK)
    }
}
