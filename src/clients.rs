//! Board API clients.
//!
//! # Supported APIs
//!
//! - **Platform** ([`Client`]): cloud subscription API, key + secret
//! - **Local** ([`LocalClient`]): the board's LAN API, local API key
//! - **Read/Write** ([`ReadWriteClient`]): cloud read/write API, single key
//! - **VBML** ([`VbmlClient`]): template composition service
//!
//! All clients share a [`Session`] that owns the base URL, default headers
//! and the [`Transport`](crate::http::Transport) used to send requests.

mod error;
mod local;
mod message;
mod platform;
mod read_write;
mod session;
mod vbml;

pub use error::ClientError;
pub use local::LocalClient;
pub use message::Message;
pub use platform::Client;
pub use read_write::ReadWriteClient;
pub use session::Session;
pub use vbml::VbmlClient;
pub use local::DEFAULT_BASE_URL as DEFAULT_LOCAL_URL;
pub use platform::DEFAULT_BASE_URL as DEFAULT_PLATFORM_URL;
pub use read_write::DEFAULT_BASE_URL as DEFAULT_READ_WRITE_URL;
pub use vbml::DEFAULT_BASE_URL as DEFAULT_VBML_URL;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
