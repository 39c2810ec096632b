//! Console rendering of encoded character data.

use std::io::Write;

use super::error::RenderError;
use super::{glyph, Code, Color, Row};

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_DARK_GRAY: &str = "\x1b[90m";

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Colors only when the output is a terminal.
    ///
    /// [`print`] checks standard output. Strings and arbitrary writers are
    /// not terminals, so [`render`] and [`pprint`] emit no colors.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Rendering options for [`pprint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Cell separator, also used to frame each row
    pub sep: String,
    /// Glyph drawn for color chips
    pub block: String,
    pub color: ColorChoice,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            sep: "|".to_string(),
            block: "◼\u{fe0e}".to_string(),
            color: ColorChoice::Auto,
        }
    }
}

/// Either a single row or a grid of rows.
#[derive(Debug, Clone, Copy)]
pub enum Printable<'a> {
    Row(&'a [Code]),
    Rows(&'a [Row]),
}

impl<'a> From<&'a [Code]> for Printable<'a> {
    fn from(row: &'a [Code]) -> Self {
        Printable::Row(row)
    }
}

impl<'a> From<&'a Row> for Printable<'a> {
    fn from(row: &'a Row) -> Self {
        Printable::Row(row)
    }
}

impl<'a> From<&'a [Row]> for Printable<'a> {
    fn from(rows: &'a [Row]) -> Self {
        Printable::Rows(rows)
    }
}

impl<'a> From<&'a Vec<Row>> for Printable<'a> {
    fn from(rows: &'a Vec<Row>) -> Self {
        Printable::Rows(rows)
    }
}

/// Render rows as text, one line per row.
pub fn render<'a>(
    data: impl Into<Printable<'a>>,
    options: &PrintOptions,
) -> Result<String, RenderError> {
    render_rows(data.into(), options, options.color.resolve(false))
}

fn render_rows(
    data: Printable<'_>,
    options: &PrintOptions,
    colors: bool,
) -> Result<String, RenderError> {
    let sep = if colors && !options.sep.is_empty() {
        format!("{}{}{}", ANSI_DARK_GRAY, options.sep, ANSI_RESET)
    } else {
        options.sep.clone()
    };

    let rows: Vec<&[Code]> = match data {
        Printable::Row(row) => vec![row],
        Printable::Rows(rows) => rows.iter().map(Vec::as_slice).collect(),
    };

    let mut out = String::new();
    for row in rows {
        let symbols = row
            .iter()
            .map(|&code| symbol(code, &options.block, colors))
            .collect::<Result<Vec<_>, _>>()?;
        out.push_str(&sep);
        out.push_str(&symbols.join(&sep));
        out.push_str(&sep);
        out.push('\n');
    }

    Ok(out)
}

/// Write a console-formatted representation of rows to `out`.
pub fn pprint<'a, W: Write>(
    data: impl Into<Printable<'a>>,
    out: &mut W,
    options: &PrintOptions,
) -> Result<(), RenderError> {
    let text = render(data, options)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

/// Print rows to standard output with the default options.
///
/// Colors are used when standard output is a terminal.
pub fn print<'a>(data: impl Into<Printable<'a>>) -> Result<(), RenderError> {
    let options = PrintOptions::default();
    let colors = options.color.resolve(atty::is(atty::Stream::Stdout));
    let text = render_rows(data.into(), &options, colors)?;

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(text.as_bytes())?;
    Ok(())
}

fn symbol(code: Code, block: &str, colors: bool) -> Result<String, RenderError> {
    if let Some(c) = glyph(code) {
        return Ok(c.to_string());
    }
    let color = Color::from_code(code).ok_or(RenderError::UnknownCharacterCode(code))?;
    if colors {
        Ok(format!("{}{}{}", color.ansi(), block, ANSI_RESET))
    } else {
        Ok(block.to_string())
    }
}
