//! VBML (board markup) message templates.
//!
//! A [`Component`] is a template string or a raw character grid, with an
//! optional [`Style`] that sizes and positions it on the board. Components
//! are composed into a full grid by the VBML service
//! ([`VbmlClient`](crate::clients::VbmlClient)).

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::chars::Rows;

/// Dynamic properties injected into templates with `{{propName}}`.
pub type Props = BTreeMap<String, String>;

/// Horizontal alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Left,
    Right,
    Center,
    Justified,
}

/// Vertical alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Top,
    Bottom,
    Center,
}

/// An absolute position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

/// Values applied to a [`Component`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Component height, 1-6 (board height when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u8>,
    /// Component width, 1-22 (board width when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    /// Exact position, bounded by `width` and `height`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_position: Option<Position>,
}

impl Style {
    pub fn is_empty(&self) -> bool {
        self == &Style::default()
    }
}

/// A message template with optional style.
///
/// The template can contain any printable board character, character codes
/// in curly braces such as `{5}` or `{65}`, props in double braces
/// (`{{propName}}`), and newlines to force a new row. Lowercase letters are
/// cast to uppercase by the service.
///
/// Raw characters set the initial (background) state of the component and
/// take precedence over the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    template: Option<String>,
    raw_characters: Option<Rows>,
    style: Style,
}

impl Component {
    /// Create a component from a template string.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            raw_characters: None,
            style: Style::default(),
        }
    }

    /// Create a component from a raw character grid.
    pub fn from_raw_characters(raw_characters: Rows) -> Self {
        Self {
            template: None,
            raw_characters: Some(raw_characters),
            style: Style::default(),
        }
    }

    pub fn with_raw_characters(mut self, raw_characters: Rows) -> Self {
        self.raw_characters = Some(raw_characters);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn height(mut self, height: u8) -> Self {
        self.style.height = Some(height);
        self
    }

    pub fn width(mut self, width: u8) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.style.justify = Some(justify);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.style.align = Some(align);
        self
    }

    pub fn absolute_position(mut self, x: u8, y: u8) -> Self {
        self.style.absolute_position = Some(Position { x, y });
        self
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn raw_characters(&self) -> Option<&Rows> {
        self.raw_characters.as_ref()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(raw) = &self.raw_characters {
            map.serialize_entry("rawCharacters", raw)?;
        } else if let Some(template) = &self.template {
            map.serialize_entry("template", template)?;
        }
        if !self.style.is_empty() {
            map.serialize_entry("style", &self.style)?;
        }
        map.end()
    }
}
