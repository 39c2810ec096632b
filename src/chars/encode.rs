//! Text to character code encoding.

use super::error::EncodingError;
use super::text::Align;
use super::{char_code, is_valid_code, Code, Row, COLS};

/// Encode a string as a list of character codes.
///
/// Lowercase letters are folded to uppercase. In addition to printable
/// characters, the string can contain character codes inside curly braces,
/// such as `{5}` or `{65}`. A one-digit code is tried before a two-digit one.
///
/// ```
/// let codes = vesta::encode("{67} Hello, World {68}").unwrap();
/// assert_eq!(
///     codes,
///     vec![67, 0, 8, 5, 12, 12, 15, 55, 0, 23, 15, 18, 12, 4, 0, 68]
/// );
/// ```
pub fn encode(s: &str) -> Result<Row, EncodingError> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '{' {
            let (digits, next) = if chars.get(i + 2) == Some(&'}') {
                (&chars[i + 1..i + 2], i + 3)
            } else if chars.get(i + 3) == Some(&'}') {
                (&chars[i + 1..i + 3], i + 4)
            } else {
                return Err(EncodingError::MalformedEscape {
                    position: i + 1,
                    first: i + 2,
                    second: i + 3,
                });
            };

            let code = parse_escape(digits, i + 1)?;
            if !is_valid_code(code) {
                return Err(EncodingError::UnsupportedCode {
                    code,
                    position: i + 2,
                });
            }
            out.push(code);
            i = next;
            continue;
        }

        let code = char_code(to_upper(c)).ok_or(EncodingError::UnsupportedCharacter {
            character: c,
            position: i + 1,
        })?;
        out.push(code);
        i += 1;
    }

    Ok(out)
}

/// Encode a string as a single board row.
///
/// `align` places the text within the row and `fill` (usually a
/// [`Color`](super::Color)) fills the remaining cells.
/// `fill` must be a valid character code.
///
/// ```
/// use vesta::{encode_row, Align};
///
/// let row = encode_row("{67} Hello, World {68}", Align::Center, 0).unwrap();
/// assert_eq!(
///     row,
///     vec![0, 0, 0, 67, 0, 8, 5, 12, 12, 15, 55, 0, 23, 15, 18, 12, 4, 0, 68, 0, 0, 0]
/// );
/// ```
pub fn encode_row(s: &str, align: Align, fill: Code) -> Result<Row, EncodingError> {
    if !is_valid_code(fill) {
        return Err(EncodingError::InvalidCode(fill));
    }

    let row = encode(s)?;

    if row.len() > COLS {
        return Err(EncodingError::LengthExceeded {
            text: s.to_string(),
            len: row.len(),
            max: COLS,
        });
    }

    Ok(format_row(&row, align, 0, fill))
}

/// Pad `row` out to exactly [`COLS`] cells.
///
/// `margin` fill cells are reserved on both sides; `row` must fit inside.
pub(crate) fn format_row(row: &[Code], align: Align, margin: usize, fill: Code) -> Row {
    debug_assert!(row.len() + margin * 2 <= COLS);

    let (before, after) = match align {
        Align::Left => (margin, COLS - row.len() - margin),
        Align::Right => (COLS - row.len() - margin, margin),
        Align::Center => {
            let pad = COLS - row.len();
            (pad / 2, pad - pad / 2)
        }
    };

    let mut out = Vec::with_capacity(COLS);
    out.resize(before, fill);
    out.extend_from_slice(row);
    out.resize(before + row.len() + after, fill);

    debug_assert_eq!(out.len(), COLS);
    out
}

fn parse_escape(digits: &[char], position: usize) -> Result<Code, EncodingError> {
    let contents: String = digits.iter().collect();
    if !digits.iter().all(char::is_ascii_digit) {
        return Err(EncodingError::InvalidEscape { contents, position });
    }
    contents
        .parse()
        .map_err(|_| EncodingError::InvalidEscape { contents, position })
}

/// Uppercase a single character, leaving it alone if it expands (e.g. `ß`).
fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
