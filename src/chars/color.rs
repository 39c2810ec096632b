//! Color chips.

use super::Code;
use serde::{Deserialize, Serialize};

/// A colored tile.
///
/// Every color is also a character code; `Color::Red as Code` is the value
/// sent to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Blank = 0,
    Red = 63,
    Orange = 64,
    Yellow = 65,
    Green = 66,
    Blue = 67,
    Violet = 68,
    White = 69,
    Black = 70,
    Filled = 71,
}

impl Color {
    /// All colors in code order.
    pub const ALL: [Color; 10] = [
        Color::Blank,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::White,
        Color::Black,
        Color::Filled,
    ];

    /// Look up the color for a character code.
    pub fn from_code(code: Code) -> Option<Color> {
        Self::ALL.iter().copied().find(|color| color.code() == code)
    }

    /// The character code for this color.
    pub fn code(self) -> Code {
        self as Code
    }

    /// ANSI escape sequence used when rendering this color in a terminal.
    pub fn ansi(self) -> &'static str {
        match self {
            Color::Blank | Color::Black => "\x1b[0m",
            Color::Red => "\x1b[31m",
            Color::Orange => "\x1b[33m",
            Color::Yellow => "\x1b[93m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[94m",
            Color::Violet => "\x1b[95m",
            Color::White | Color::Filled => "\x1b[97m",
        }
    }
}

impl From<Color> for Code {
    fn from(color: Color) -> Self {
        color.code()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Blank => "blank",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Violet => "violet",
            Color::White => "white",
            Color::Black => "black",
            Color::Filled => "filled",
        };
        write!(f, "{}", name)
    }
}
