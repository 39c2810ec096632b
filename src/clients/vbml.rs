//! VBML composition service client.

use serde::Serialize;

use super::{ClientResult, Session};
use crate::chars::Rows;
use crate::vbml::{Component, Props};

/// Default VBML service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://vbml.vestaboard.com";

#[derive(Debug, Serialize)]
struct ComposeRequest<'a> {
    components: &'a [Component],
    #[serde(skip_serializing_if = "Option::is_none")]
    props: Option<&'a Props>,
}

/// Client for the VBML composition service. No credentials are needed.
#[derive(Debug, Clone)]
pub struct VbmlClient {
    session: Session,
}

impl Default for VbmlClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VbmlClient {
    pub fn new() -> Self {
        Self::with_session(Session::new(DEFAULT_BASE_URL))
    }

    pub fn with_session(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Compose components into a character grid, filling in `props`.
    pub fn compose(&self, components: &[Component], props: &Props) -> ClientResult<Rows> {
        let request = ComposeRequest {
            components,
            props: (!props.is_empty()).then_some(props),
        };
        let response = Session::error_for_status(self.session.post_json("/compose", &request)?)?;
        Ok(serde_json::from_slice(&response.body)?)
    }
}
