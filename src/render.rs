//! Terminal rendering of classified lines

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Print, SetAttribute, SetForegroundColor},
};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::syntax::{Color, Line, Style, Theme};

/// Paint settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintOptions {
    /// Prefix each line with its 1-based number
    pub line_numbers: bool,
    /// Emit ANSI styling (off when writing to a pipe or file)
    pub color: bool,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            line_numbers: false,
            color: true,
        }
    }
}

/// Paint lines to `out`, separated by `\n`
///
/// The painted text (escape sequences and gutter aside) is exactly the
/// text the lines were classified from.
pub fn paint<W: Write>(out: &mut W, lines: &[Line], theme: &Theme, options: PaintOptions) -> Result<()> {
    let gutter_width = lines.len().to_string().len();

    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            queue!(out, Print('\n'))?;
        }

        if options.line_numbers {
            let number = format!("{:>width$} ", idx + 1, width = gutter_width);
            if options.color {
                queue!(
                    out,
                    SetAttribute(Attribute::Dim),
                    Print(number),
                    SetAttribute(Attribute::NormalIntensity)
                )?;
            } else {
                queue!(out, Print(number))?;
            }
        }

        for token in line {
            let style = theme.style(token.category);
            if options.color && !style.is_default() {
                set_style(out, style)?;
                queue!(out, Print(&token.text), SetAttribute(Attribute::Reset))?;
            } else {
                queue!(out, Print(&token.text))?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn set_style<W: Write>(out: &mut W, style: Style) -> Result<()> {
    if let Color::Rgb(r, g, b) = style.fg {
        queue!(out, SetForegroundColor(style::Color::Rgb { r, g, b }))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

/// Tab stop used when counting dump columns
const TAB_WIDTH: usize = 8;

/// Write one `line:col<TAB>category<TAB>"text"` row per token
///
/// Columns are 1-based display columns, with tabs expanded to the next
/// multiple of eight.
pub fn dump_tokens<W: Write>(out: &mut W, lines: &[Line]) -> Result<()> {
    for (idx, line) in lines.iter().enumerate() {
        let mut col = 0;
        for token in line {
            writeln!(out, "{}:{}\t{}\t{:?}", idx + 1, col + 1, token.category.name(), token.text)?;
            col = advance_column(col, &token.text);
        }
    }
    out.flush()?;
    Ok(())
}

/// Display column reached after writing `text` starting at `col`
fn advance_column(col: usize, text: &str) -> usize {
    text.chars().fold(col, |col, ch| match ch {
        '\t' => (col / TAB_WIDTH + 1) * TAB_WIDTH,
        _ => col + UnicodeWidthChar::width(ch).unwrap_or(0),
    })
}
