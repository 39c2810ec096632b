//! Character encoding for the split-flap board.
//!
//! The board is a fixed grid of [`ROWS`] x [`COLS`] tiles. Every tile shows
//! one character code: a blank, a printable glyph, or a color chip.
//!
//! - `encode`: text to a flat sequence of character codes
//! - `encode_row`: text to a single aligned row
//! - `encode_text`: a block of text to a full grid with wrapping
//! - `pprint`: console rendering of rows and grids for debugging

mod color;
mod encode;
mod error;
mod pprint;
mod text;

pub use color::Color;
pub use encode::{encode, encode_row};
pub use error::{EncodingError, RenderError};
pub use pprint::{pprint, print, render, ColorChoice, Printable, PrintOptions};
pub use text::{encode_text, Align, TextOptions, VAlign};

/// The number of columns on a board.
pub const COLS: usize = 22;

/// The number of rows on a board.
pub const ROWS: usize = 6;

/// A single character code.
pub type Code = u8;

/// A row of character codes.
pub type Row = Vec<Code>;

/// A list of rows, forming a character grid.
pub type Rows = Vec<Row>;

/// Glyphs indexed by character code. Spaces past index 0 are unassigned codes.
pub(crate) const PRINTABLE: &str =
    " ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890!@#$() - +&=;: '\"%,.  /? °";

/// Look up the character code for an (uppercase) printable character.
pub fn char_code(c: char) -> Option<Code> {
    if c == ' ' {
        return Some(0);
    }
    PRINTABLE
        .chars()
        .position(|p| p == c)
        .map(|index| index as Code)
}

/// Look up the glyph shown for a printable character code.
///
/// Unassigned codes inside the printable range render as a space.
pub fn glyph(code: Code) -> Option<char> {
    PRINTABLE.chars().nth(code as usize)
}

/// Check whether `code` is a supported character code (glyph or color).
pub fn is_valid_code(code: Code) -> bool {
    Color::from_code(code).is_some() || glyph(code).is_some_and(|c| c != ' ')
}

/// Check if `rows` is a well-formed board grid.
pub fn validate_rows(rows: &[Row]) -> Result<(), EncodingError> {
    if rows.len() != ROWS || rows.iter().any(|row| row.len() != COLS) {
        return Err(EncodingError::Dimensions {
            rows: ROWS,
            cols: COLS,
        });
    }
    Ok(())
}
