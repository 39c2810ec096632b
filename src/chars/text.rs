//! Multi-line text layout.
//!
//! Lays out a block of text into board rows: explicit newlines start new
//! rows, long lines wrap at break codes, and the result is padded or
//! rejected to fit the requested number of rows.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::encode::{encode, format_row};
use super::error::EncodingError;
use super::{is_valid_code, Code, Rows, COLS, ROWS};

/// Horizontal alignment of text within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for Align {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            other => Err(EncodingError::UnknownAlignment(other.to_string())),
        }
    }
}

impl TryFrom<String> for Align {
    type Error = EncodingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Vertical alignment of text within the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
    /// Never add rows. Overflowing text is truncated instead of rejected.
    None,
}

impl FromStr for VAlign {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VAlign::Top),
            "middle" => Ok(VAlign::Middle),
            "bottom" => Ok(VAlign::Bottom),
            "none" => Ok(VAlign::None),
            other => Err(EncodingError::UnknownVerticalAlignment(other.to_string())),
        }
    }
}

impl TryFrom<String> for VAlign {
    type Error = EncodingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Layout options for [`encode_text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOptions {
    /// Horizontal alignment of each row
    #[serde(default)]
    pub align: Align,
    /// Vertical alignment of the rows within `max_rows`
    #[serde(default)]
    pub valign: VAlign,
    /// Maximum number of rows; zero means unlimited
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
    /// Width in columns of the left and right margins
    #[serde(default)]
    pub margin: usize,
    /// Character code used for unused cells
    #[serde(default)]
    pub fill: Code,
    /// Character codes where long lines may be broken
    #[serde(default = "default_breaks")]
    pub breaks: BTreeSet<Code>,
}

pub fn default_max_rows() -> usize {
    ROWS
}

pub fn default_breaks() -> BTreeSet<Code> {
    BTreeSet::from([0])
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            align: Align::default(),
            valign: VAlign::default(),
            max_rows: default_max_rows(),
            margin: 0,
            fill: 0,
            breaks: default_breaks(),
        }
    }
}

impl TextOptions {
    /// Set the horizontal alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the vertical alignment.
    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    /// Set the maximum number of rows (zero for unlimited).
    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set the left and right margin width.
    pub fn margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Set the fill character code.
    pub fn fill(mut self, fill: Code) -> Self {
        self.fill = fill;
        self
    }

    /// Replace the set of break codes.
    pub fn breaks(mut self, breaks: impl IntoIterator<Item = Code>) -> Self {
        self.breaks = breaks.into_iter().collect();
        self
    }

    /// Number of columns available for text between the margins.
    pub fn usable_cols(&self) -> usize {
        COLS.saturating_sub(self.margin * 2)
    }

    /// Check that the options describe a layout that can be produced.
    pub fn validate(&self) -> Result<(), EncodingError> {
        if self.usable_cols() == 0 {
            return Err(EncodingError::MarginTooWide {
                margin: self.margin,
                max: (COLS - 1) / 2,
            });
        }
        if !is_valid_code(self.fill) {
            return Err(EncodingError::InvalidCode(self.fill));
        }
        if let Some(&code) = self.breaks.iter().find(|&&code| !is_valid_code(code)) {
            return Err(EncodingError::InvalidCode(code));
        }
        Ok(())
    }
}

/// Encode a block of text into rows of character codes.
///
/// Each line of `s` is encoded on its own. Lines end at `\n`, `\r\n` or a
/// bare `\r`, and at the other Unicode line boundaries (vertical tab, form
/// feed, `\x1c`..`\x1e`, NEL, U+2028, U+2029). A line that does not fit between
/// the margins is broken at the last break code that fits (the break code
/// itself is dropped), or at the column limit if there is none.
///
/// When fewer than `max_rows` rows are produced, fill rows are added
/// according to `valign`. Producing more than `max_rows` rows is an error,
/// except with [`VAlign::None`], which truncates instead.
///
/// ```
/// use vesta::{encode_text, Align, TextOptions, VAlign};
///
/// let options = TextOptions::default()
///     .align(Align::Center)
///     .valign(VAlign::Middle);
/// let rows = encode_text("multiple\nlines\nof\ntext", &options).unwrap();
/// assert_eq!(rows.len(), 6);
/// assert_eq!(
///     rows[1],
///     vec![0, 0, 0, 0, 0, 0, 0, 13, 21, 12, 20, 9, 16, 12, 5, 0, 0, 0, 0, 0, 0, 0]
/// );
/// ```
pub fn encode_text(s: &str, options: &TextOptions) -> Result<Rows, EncodingError> {
    options.validate()?;

    let max_cols = options.usable_cols();
    let mut rows: Rows = Vec::new();

    for text in split_lines(s) {
        let mut line = encode(text)?;

        while line.len() > max_cols {
            let (pos, resume) = find_break(&line, max_cols, &options.breaks);
            rows.push(format_row(
                &line[..pos],
                options.align,
                options.margin,
                options.fill,
            ));
            line.drain(..resume);
        }

        rows.push(format_row(
            &line,
            options.align,
            options.margin,
            options.fill,
        ));
    }

    if options.max_rows == 0 {
        return Ok(rows);
    }

    let max_rows = options.max_rows;
    let nrows = rows.len();

    if nrows > max_rows {
        if options.valign == VAlign::None {
            rows.truncate(max_rows);
            return Ok(rows);
        }
        return Err(EncodingError::TooManyLines {
            lines: nrows,
            max: max_rows,
        });
    }

    let pad = max_rows - nrows;
    let (before, after) = match options.valign {
        VAlign::Top => (0, pad),
        VAlign::Bottom => (pad, 0),
        VAlign::Middle => (pad / 2, pad - pad / 2),
        VAlign::None => (0, 0),
    };

    let empty = vec![options.fill; COLS];
    let mut out = Vec::with_capacity(nrows + before + after);
    out.extend(std::iter::repeat(empty.clone()).take(before));
    out.append(&mut rows);
    out.extend(std::iter::repeat(empty).take(after));

    Ok(out)
}

/// Split `s` at line boundaries. A trailing boundary does not start an
/// extra empty line.
fn split_lines(s: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&s[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < s.len() {
        lines.push(&s[start..]);
    }
    lines
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Find where to break a line that is longer than `max_cols`.
///
/// Returns the end of the emitted row and the position to resume from.
fn find_break(line: &[Code], max_cols: usize, breaks: &BTreeSet<Code>) -> (usize, usize) {
    let end = line.len().min(max_cols);
    (1..=end)
        .rev()
        .find(|&pos| breaks.contains(&line[pos]))
        .map(|pos| (pos, pos + 1))
        .unwrap_or((end, end))
}
