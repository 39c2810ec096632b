//! Configuration management for vesta

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::chars::{encode_text, EncodingError, Rows};
use crate::clients::{Client, LocalClient, ReadWriteClient, Session, VbmlClient};
use crate::http::CurlTransport;

impl Config {
    /// Get the config file path (~/.config/vesta/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/vesta)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Encode text with the configured layout.
    pub fn encode_text(&self, text: &str) -> Result<Rows, EncodingError> {
        encode_text(text, &self.text)
    }

    /// Build a session for `base_url` with the configured timeout and headers.
    pub fn session(&self, base_url: &str) -> Session {
        let transport =
            CurlTransport::new().with_timeout(Duration::from_secs(self.http.timeout_secs));
        Session::new(base_url)
            .with_transport(Arc::new(transport))
            .with_headers(self.http.headers.clone())
    }

    pub fn client(&self, api_key: &str, api_secret: &str) -> Client {
        Client::with_session(self.session(&self.endpoints.platform), api_key, api_secret)
    }

    pub fn local_client(&self, api_key: Option<&str>) -> LocalClient {
        LocalClient::with_session(self.session(&self.endpoints.local), api_key)
    }

    pub fn read_write_client(&self, read_write_key: &str) -> ReadWriteClient {
        ReadWriteClient::with_session(self.session(&self.endpoints.read_write), read_write_key)
    }

    pub fn vbml_client(&self) -> VbmlClient {
        VbmlClient::with_session(self.session(&self.endpoints.vbml))
    }
}
