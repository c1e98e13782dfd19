//! The PDF standard-14 Helvetica family, used when the TrueType faces cannot be loaded.
//!
//! Standard fonts are never embedded: every PDF viewer ships them. Text is encoded with
//! WinAnsiEncoding, so only Latin-1 can be drawn; anything else is written as `?`.

use crate::refs::{ObjectReferences, RefType};
use crate::Pt;
use pdf_writer::{Name, Pdf};

/// One of the three Helvetica faces used for fallback rendering
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

// Advance widths in 1/1000 em for ASCII 0x20..=0x7E, from the Adobe AFM files.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0    1    2    3    4    5    6    7    8    9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0    1    2    3    4    5    6    7    8    9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    333, 333, 584, 584, 584, 611, 975,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    333, 278, 333, 584, 556, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // {    |    }    ~
    389, 280, 389, 584,
];

const ASCENDER: f32 = 718.0;
const DESCENDER: f32 = -207.0;

impl BuiltinFont {
    /// The PostScript name viewers resolve the font by
    pub fn base_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => &HELVETICA_WIDTHS,
        }
    }

    /// Advance width of a single character in 1/1000 em. Characters outside printable ASCII
    /// are approximated by the width of a lower-case `o`.
    fn char_width(&self, ch: char) -> u16 {
        let widths = self.widths();
        let encoded = encode_char(ch);
        if (0x20..=0x7e).contains(&encoded) {
            widths[(encoded - 0x20) as usize]
        } else {
            widths[(b'o' - 0x20) as usize]
        }
    }

    /// The rendered width of `text` at `size`
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        size * (units as f32 / 1000.0)
    }

    /// The AFM ascender scaled to `size`
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (ASCENDER / 1000.0)
    }

    /// The AFM descender scaled to `size`; negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * (DESCENDER / 1000.0)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(font_index));
        writer
            .type1_font(id)
            .base_font(Name(self.base_name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Map a character to its WinAnsiEncoding byte. Latin-1 maps onto itself; everything else
/// becomes `?`.
pub fn encode_char(ch: char) -> u8 {
    match ch as u32 {
        code @ 0x20..=0x7e => code as u8,
        code @ 0xa0..=0xff => code as u8,
        _ => b'?',
    }
}

/// Encode a string for a builtin font, one byte per character
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

/// Replace the typographic characters a resume typically carries (bullets, dashes, curly
/// quotes) with their plain ASCII counterparts so they survive the Latin-1 fallback fonts
pub fn sanitize_ascii(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{25CF}' | '\u{2022}' => '-',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_with_afm_widths() {
        // "Hi" = H (722) + i (222)
        let width = BuiltinFont::Helvetica.width_of("Hi", Pt(10.0));
        assert!((width.0 - 9.44).abs() < 1e-4);
        let bold = BuiltinFont::HelveticaBold.width_of("Hi", Pt(10.0));
        assert!(bold > width);
        assert_eq!(
            BuiltinFont::HelveticaOblique.width_of("Hi", Pt(10.0)),
            width
        );
    }

    #[test]
    fn encodes_latin1_and_replaces_the_rest() {
        assert_eq!(encode_win_ansi("café"), b"caf\xe9".to_vec());
        assert_eq!(encode_win_ansi("a\u{25CF}b"), b"a?b".to_vec());
    }

    #[test]
    fn sanitizes_typographic_characters() {
        assert_eq!(
            sanitize_ascii("\u{25CF} Led \u{2022} \u{201C}X\u{201D} \u{2014} it\u{2019}s"),
            "- Led - \"X\" - it's"
        );
    }
}
