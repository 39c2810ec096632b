//! Errors raised while encoding or rendering character data.
//!
//! Positions are 1-based character offsets into the input line.

use super::Code;
use thiserror::Error;

/// Error type for encoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("{position}: unsupported character: {character}")]
    UnsupportedCharacter { character: char, position: usize },

    #[error("{position}: missing }} at index {first} or {second}")]
    MalformedEscape {
        /// Position of the opening brace
        position: usize,
        /// Expected closing brace position for a 1-digit code
        first: usize,
        /// Expected closing brace position for a 2-digit code
        second: usize,
    },

    #[error("{position}: invalid character code sequence: {{{contents}}}")]
    InvalidEscape { contents: String, position: usize },

    #[error("{position}: unsupported character code: {code}")]
    UnsupportedCode { code: Code, position: usize },

    #[error("unsupported character code: {0}")]
    InvalidCode(Code),

    #[error("{text:?} results in {len} characters (max {max})")]
    LengthExceeded { text: String, len: usize, max: usize },

    #[error("unknown alignment: {0}")]
    UnknownAlignment(String),

    #[error("unknown vertical alignment: {0}")]
    UnknownVerticalAlignment(String),

    #[error("text results in {lines} lines (max {max})")]
    TooManyLines { lines: usize, max: usize },

    #[error("margin of {margin} leaves no usable columns (max {max})")]
    MarginTooWide { margin: usize, max: usize },

    #[error("expected a ({rows}, {cols}) array of encoded characters")]
    Dimensions { rows: usize, cols: usize },
}

/// Error type for console rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown character code: {0}")]
    UnknownCharacterCode(Code),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
