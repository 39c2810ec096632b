//! Unit tests for the character encoding API

use vesta::chars::{char_code, glyph, is_valid_code, validate_rows};
use vesta::{
    encode, encode_row, encode_text, Align, Color, EncodingError, TextOptions, VAlign, COLS, ROWS,
};

#[test]
fn encode_maps_letters_case_insensitively() {
    assert_eq!(encode("abc").unwrap(), vec![1, 2, 3]);
    assert_eq!(encode("ABC").unwrap(), encode("abc").unwrap());
}

#[test]
fn encode_rejects_unsupported_character() {
    let err = encode("<>").unwrap_err();
    assert!(matches!(
        err,
        EncodingError::UnsupportedCharacter { character: '<', .. }
    ));
    assert!(err.to_string().contains('<'));
}

#[test]
fn encode_rejects_unsupported_code() {
    let err = encode("{99}").unwrap_err();
    assert!(matches!(err, EncodingError::UnsupportedCode { code: 99, .. }));
    assert!(err.to_string().contains("99"));
}

#[test]
fn encode_rejects_malformed_escape() {
    assert!(matches!(
        encode("{20").unwrap_err(),
        EncodingError::MalformedEscape { .. }
    ));
}

#[test]
fn encode_accepts_one_and_two_digit_escapes() {
    assert_eq!(encode("{0}{5}{63}").unwrap(), vec![0, 5, 63]);
}

#[test]
fn encode_row_counts_escapes_as_one_column() {
    let text = format!("{}{{10}}", "a".repeat(21));
    let row = encode_row(&text, Align::Left, 0).unwrap();
    assert_eq!(row.len(), COLS);
    assert_eq!(row[21], 10);
}

#[test]
fn encode_row_rejects_long_text() {
    let err = encode_row(&"a".repeat(30), Align::Left, 0).unwrap_err();
    assert!(matches!(err, EncodingError::LengthExceeded { len: 30, .. }));

    let text = format!("{}{{10}}", "a".repeat(22));
    let err = encode_row(&text, Align::Left, 0).unwrap_err();
    assert!(matches!(
        err,
        EncodingError::LengthExceeded {
            len: 23,
            max: COLS,
            ..
        }
    ));
}

#[test]
fn encode_row_places_text() {
    let left = encode_row("abc", Align::Left, 0).unwrap();
    assert_eq!(&left[..4], &[1, 2, 3, 0]);

    let center = encode_row("abc", Align::Center, 0).unwrap();
    assert_eq!(&center[9..12], &[1, 2, 3]);
    assert!(center[..9].iter().all(|&code| code == 0));

    let right = encode_row("abc", Align::Right, 0).unwrap();
    assert_eq!(&right[19..], &[1, 2, 3]);
}

#[test]
fn encode_row_uses_fill() {
    let row = encode_row("a", Align::Left, Color::Blue.code()).unwrap();
    assert_eq!(row[0], 1);
    assert!(row[1..].iter().all(|&code| code == 67));
}

#[test]
fn encode_row_rejects_invalid_fill() {
    let err = encode_row("a", Align::Left, 200).unwrap_err();
    assert_eq!(err, EncodingError::InvalidCode(200));
}

#[test]
fn encode_text_defaults() {
    let rows = encode_text("a\nb\nc", &TextOptions::default()).unwrap();
    assert_eq!(rows.len(), ROWS);
    assert_eq!(rows[0][0], 1);
    assert_eq!(rows[1][0], 2);
    assert_eq!(rows[2][0], 3);
    assert!(rows[3..].iter().flatten().all(|&code| code == 0));
}

#[test]
fn encode_text_middle_places_rows_in_center() {
    let options = TextOptions::default().valign(VAlign::Middle);
    let rows = encode_text("a\nb", &options).unwrap();
    assert_eq!(rows[2][0], 1);
    assert_eq!(rows[3][0], 2);
}

#[test]
fn encode_text_none_returns_only_content() {
    let options = TextOptions::default().valign(VAlign::None);
    assert_eq!(encode_text("a\nb", &options).unwrap().len(), 2);
}

#[test]
fn encode_text_too_many_lines() {
    let err = encode_text("a\nb\nc\nd\ne\nf\ng", &TextOptions::default()).unwrap_err();
    assert_eq!(err, EncodingError::TooManyLines { lines: 7, max: 6 });
}

#[test]
fn encode_text_wraps_words() {
    let text = vec!["word"; 10].join(" ");
    let options = TextOptions::default().valign(VAlign::None);
    let rows = encode_text(&text, &options).unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn encode_text_is_deterministic() {
    let options = TextOptions::default().align(Align::Center);
    let text = "Deterministic output\nfor the same input";
    assert_eq!(
        encode_text(text, &options).unwrap(),
        encode_text(text, &options).unwrap()
    );
}

#[test]
fn every_row_is_board_width() {
    let options = TextOptions::default().align(Align::Right).margin(3);
    let rows = encode_text("one\ntwo three four five six", &options).unwrap();
    assert!(rows.iter().all(|row| row.len() == COLS));
    assert!(validate_rows(&rows).is_ok());
}

#[test]
fn character_table_lookups() {
    assert_eq!(char_code(' '), Some(0));
    assert_eq!(char_code('A'), Some(1));
    assert_eq!(char_code('0'), Some(36));
    assert_eq!(char_code('°'), Some(62));
    assert_eq!(char_code('a'), None);
    assert_eq!(glyph(27), Some('1'));
    assert_eq!(glyph(Color::Red.code()), None);
}

#[test]
fn valid_codes_include_colors_but_not_gaps() {
    assert!(is_valid_code(0));
    assert!(is_valid_code(62));
    assert!(is_valid_code(71));
    assert!(!is_valid_code(43));
    assert!(!is_valid_code(72));
}

#[test]
fn validate_rows_checks_dimensions() {
    assert!(validate_rows(&vec![vec![0; COLS]; ROWS]).is_ok());
    assert_eq!(
        validate_rows(&vec![vec![0; COLS]; ROWS - 1]),
        Err(EncodingError::Dimensions {
            rows: ROWS,
            cols: COLS
        })
    );
    assert!(validate_rows(&vec![vec![0; COLS - 1]; ROWS]).is_err());
}
