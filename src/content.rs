//! Content stream rendering for pages.

use crate::builtin::encode_win_ansi;
use crate::colour::Colour;
use crate::face::Face;
use crate::page::{SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

/// Renders positioned text spans to a PDF content stream, switching font and fill colour
/// only when they change between consecutive spans.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_spans(
    spans: &[SpanLayout],
    fonts: &Arena<Face>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    let Some(first) = spans.first() else {
        return Ok(content);
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write_font(&mut content, current_font)?;
    write_colour(&mut content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write_font(&mut content, current_font)?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(&mut content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        match &fonts[current_font.id] {
            Face::Embedded(font) => {
                write!(content, "<")?;
                for ch in span.text.chars() {
                    // a face without '?' or a replacement glyph draws .notdef
                    let gid = font.glyph_id_or_replacement(ch).unwrap_or(0);
                    write!(content, "{gid:04x}")?;
                }
                write!(content, "> Tj\n")?;
            }
            Face::Builtin(_) => {
                write!(content, "(")?;
                write_escaped(&mut content, &encode_win_ansi(&span.text))?;
                write!(content, ") Tj\n")?;
            }
        }
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_font(content: &mut Vec<u8>, font: SpanFont) -> Result<(), std::io::Error> {
    write!(content, "/F{} {} Tf\n", font.id.index(), font.size)
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

/// Write a literal string body, escaping the characters PDF string syntax reserves
fn write_escaped(content: &mut Vec<u8>, bytes: &[u8]) -> Result<(), std::io::Error> {
    for &byte in bytes {
        match byte {
            b'(' | b')' | b'\\' => content.write_all(&[b'\\', byte])?,
            _ => content.write_all(&[byte])?,
        }
    }
    Ok(())
}
