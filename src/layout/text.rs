use crate::face::Face;
use crate::units::Pt;

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, face: &Face, size: Pt) -> Pt {
    face.width_of(text, size)
}

/// One visual line produced by word wrapping
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine<'a> {
    pub words: Vec<&'a str>,
    /// Sum of the word widths, without any inter-word space
    pub words_width: Pt,
}

impl WrappedLine<'_> {
    /// The words joined by single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Width of the line when set with single spaces
    pub fn natural_width(&self, space_width: Pt) -> Pt {
        self.words_width + space_width * self.words.len().saturating_sub(1) as f32
    }
}

/// Greedily wrap `text` into lines no wider than the available width, without hyphenation.
/// The first line may have a different width from the rest (hanging indents). A word is
/// always placed at the start of a line even if it's wider than the line, and text with
/// no words still occupies one (empty) line.
pub fn wrap_text<'a>(
    text: &'a str,
    first_line_width: Pt,
    other_lines_width: Pt,
    face: &Face,
    size: Pt,
) -> Vec<WrappedLine<'a>> {
    let space_width = face.width_of(" ", size);

    let mut lines: Vec<WrappedLine<'a>> = Vec::new();
    let mut current = WrappedLine {
        words: Vec::new(),
        words_width: Pt(0.0),
    };
    let mut accumulated = Pt(0.0);

    for word in text.split_whitespace() {
        let word_width = face.width_of(word, size);
        let available = if lines.is_empty() {
            first_line_width
        } else {
            other_lines_width
        };

        if current.words.is_empty() {
            accumulated = word_width;
        } else if accumulated + space_width + word_width <= available {
            accumulated += space_width + word_width;
        } else {
            lines.push(std::mem::replace(
                &mut current,
                WrappedLine {
                    words: Vec::new(),
                    words_width: Pt(0.0),
                },
            ));
            accumulated = word_width;
        }

        current.words.push(word);
        current.words_width += word_width;
    }

    lines.push(current);
    lines
}

/// How many visual lines `text` wraps into at the given width. Always at least 1.
pub fn wrap_line_count(text: &str, available_width: Pt, face: &Face, size: Pt) -> usize {
    wrap_text(text, available_width, available_width, face, size).len()
}

/// How many visual lines a bulleted line's content wraps into when its first line is
/// `first_line_available` wide and the rest are `other_lines_available` wide
pub fn wrap_hanging_bullet(
    content: &str,
    first_line_available: Pt,
    other_lines_available: Pt,
    face: &Face,
    size: Pt,
) -> usize {
    wrap_text(content, first_line_available, other_lines_available, face, size).len()
}

/// Vertical distance from the top of a line box to the baseline that centres the font's
/// glyphs within the box
pub fn baseline_offset(face: &Face, size: Pt, line_height: Pt) -> Pt {
    let ascent = face.ascent(size);
    let descent = face.descent(size);
    line_height / 2.0 + (ascent + descent) / 2.0
}
