//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::chars::TextOptions;
use crate::clients::{
    DEFAULT_LOCAL_URL, DEFAULT_PLATFORM_URL, DEFAULT_READ_WRITE_URL, DEFAULT_VBML_URL,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default layout for encoded text
    #[serde(default)]
    pub text: TextOptions,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// API base URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_platform_url")]
    pub platform: String,
    #[serde(default = "default_local_url")]
    pub local: String,
    #[serde(default = "default_read_write_url")]
    pub read_write: String,
    #[serde(default = "default_vbml_url")]
    pub vbml: String,
}

pub fn default_platform_url() -> String {
    DEFAULT_PLATFORM_URL.to_string()
}

pub fn default_local_url() -> String {
    DEFAULT_LOCAL_URL.to_string()
}

pub fn default_read_write_url() -> String {
    DEFAULT_READ_WRITE_URL.to_string()
}

pub fn default_vbml_url() -> String {
    DEFAULT_VBML_URL.to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            platform: default_platform_url(),
            local: default_local_url(),
            read_write: default_read_write_url(),
            vbml: default_vbml_url(),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Maximum time for a single request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Extra headers sent with every request (e.g. User-Agent)
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

pub fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            headers: BTreeMap::new(),
        }
    }
}
