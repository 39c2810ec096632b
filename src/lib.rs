//! vesta
//!
//! Encode text for a 6 x 22 split-flap board and send it through the
//! board's HTTP APIs.
//!
//! ```
//! use vesta::{encode_text, Align, TextOptions, VAlign};
//!
//! let options = TextOptions::default().align(Align::Center).valign(VAlign::Middle);
//! let rows = encode_text("Hello\nWorld", &options).unwrap();
//! assert_eq!(rows.len(), vesta::ROWS);
//! ```

pub mod chars;
pub mod clients;
pub mod config;
pub mod http;
pub mod vbml;

pub use chars::{
    encode, encode_row, encode_text, pprint, Align, Code, Color, EncodingError, RenderError, Row,
    Rows, TextOptions, VAlign, COLS, ROWS,
};
pub use clients::{Client, ClientError, LocalClient, Message, ReadWriteClient, VbmlClient};
pub use config::Config;
pub use vbml::Component;
