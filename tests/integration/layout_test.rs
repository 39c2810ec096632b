//! End-to-end layout tests: text in, board grid out

use vesta::chars::{char_code, render, validate_rows, ColorChoice, PrintOptions};
use vesta::{encode, encode_text, Align, Color, EncodingError, TextOptions, VAlign, COLS, ROWS};

fn plain() -> PrintOptions {
    PrintOptions {
        color: ColorChoice::Never,
        ..PrintOptions::default()
    }
}

/// Render a grid and strip the frame so each line is the visible text.
fn visible(rows: &[Vec<u8>]) -> Vec<String> {
    let options = PrintOptions {
        sep: String::new(),
        ..plain()
    };
    render(rows, &options)
        .unwrap()
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}

#[test]
fn long_message_wraps_across_the_board() {
    let text = "The quick brown fox jumps over the lazy dog and keeps running";
    let rows = encode_text(text, &TextOptions::default()).unwrap();

    assert!(validate_rows(&rows).is_ok());
    assert_eq!(
        visible(&rows),
        vec![
            "THE QUICK BROWN FOX",
            "JUMPS OVER THE LAZY",
            "DOG AND KEEPS RUNNING",
            "",
            "",
            "",
        ]
    );
}

#[test]
fn wrapped_rows_never_exceed_usable_columns() {
    let options = TextOptions::default().margin(2).valign(VAlign::None);
    let text = "a bb ccc dddd eeeee ffffff ggggggg hhhhhhhh";
    let rows = encode_text(text, &options).unwrap();

    for row in &rows {
        assert_eq!(row.len(), COLS);
        assert_eq!(&row[..2], &[0, 0]);
        assert_eq!(&row[COLS - 2..], &[0, 0]);
    }
}

#[test]
fn framed_message_with_color_fill() {
    let red = Color::Red.code();
    let options = TextOptions::default()
        .align(Align::Center)
        .valign(VAlign::Middle)
        .margin(1)
        .fill(red);
    let rows = encode_text("Sale", &options).unwrap();

    assert_eq!(rows.len(), ROWS);
    assert!(rows[0].iter().all(|&code| code == red));
    assert!(rows[5].iter().all(|&code| code == red));
    assert_eq!(rows[2][0], red);
    assert_eq!(rows[2][COLS - 1], red);
    assert_eq!(&rows[2][9..13], encode("SALE").unwrap().as_slice());
}

#[test]
fn escapes_mix_with_text() {
    let rows = encode_text("{66} Open {66}", &TextOptions::default()).unwrap();
    let green = Color::Green.code();
    assert_eq!(&rows[0][..7], &[green, 0, 15, 16, 5, 14, 0]);
    assert_eq!(rows[0][7], green);
}

#[test]
fn hyphenated_words_break_at_hyphen() {
    let options = TextOptions::default().breaks([0, char_code('-').unwrap()]);
    let rows = encode_text("extraordinarily-well-behaved", &options).unwrap();
    assert_eq!(rows[0][..20], encode("EXTRAORDINARILY-WELL").unwrap()[..]);
    assert_eq!(rows[1][..7], encode("BEHAVED").unwrap()[..]);
}

#[test]
fn overflow_reports_line_count() {
    let text = "1\n2\n3\n4\n5\n6\n7\n8";
    let err = encode_text(text, &TextOptions::default()).unwrap_err();
    assert_eq!(err, EncodingError::TooManyLines { lines: 8, max: 6 });
}

#[test]
fn unsupported_character_reports_position() {
    let err = encode_text("fine\nnot fine~", &TextOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        EncodingError::UnsupportedCharacter { character: '~', .. }
    ));
}
