//! Message payloads accepted by the cloud APIs.

use serde::Serialize;

use crate::chars::{validate_rows, EncodingError, Rows};

/// A message to show on the board.
///
/// Text is laid out by the remote service. A character grid must be exactly
/// 6 x 22 codes and is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Message {
    Text(String),
    Characters(Rows),
}

impl Message {
    /// Check that a character grid has the board's dimensions.
    pub fn validate(&self) -> Result<(), EncodingError> {
        match self {
            Message::Text(_) => Ok(()),
            Message::Characters(rows) => validate_rows(rows),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<Rows> for Message {
    fn from(rows: Rows) -> Self {
        Message::Characters(rows)
    }
}
