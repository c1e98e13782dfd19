use crate::builtin::BuiltinFont;
use crate::font::Font;
use crate::refs::ObjectReferences;
use crate::Pt;
use pdf_writer::Pdf;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A font face that text can be measured and drawn with: either an embedded TrueType font
/// or one of the builtin Helvetica faces. Cloning is cheap; embedded fonts are shared.
#[derive(Debug, Clone)]
pub enum Face {
    Embedded(Arc<Font>),
    Builtin(BuiltinFont),
}

impl Face {
    /// The rendered width of `text` at `size`
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        match self {
            Face::Embedded(font) => font.width_of(text, size),
            Face::Builtin(font) => font.width_of(text, size),
        }
    }

    /// Distance from the baseline to the top of the face at `size`
    pub fn ascent(&self, size: Pt) -> Pt {
        match self {
            Face::Embedded(font) => font.ascent(size),
            Face::Builtin(font) => font.ascent(size),
        }
    }

    /// Distance from the baseline to the bottom of the face at `size`; negative
    pub fn descent(&self, size: Pt) -> Pt {
        match self {
            Face::Embedded(font) => font.descent(size),
            Face::Builtin(font) => font.descent(size),
        }
    }

    /// Whether this is one of the standard Helvetica faces
    pub fn is_builtin(&self) -> bool {
        matches!(self, Face::Builtin(_))
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        match self {
            Face::Embedded(font) => font.write(refs, font_index, writer),
            Face::Builtin(font) => font.write(refs, font_index, writer),
        }
    }
}

/// The three styles the layout draws with
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// Where the TrueType family lives on disk
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontFiles {
    /// Directory the file names are resolved against
    pub base_dir: PathBuf,
    pub regular: PathBuf,
    pub bold: PathBuf,
    pub italic: PathBuf,
}

impl Default for FontFiles {
    fn default() -> Self {
        FontFiles {
            base_dir: PathBuf::from("fonts"),
            regular: PathBuf::from("DejaVuSans.ttf"),
            bold: PathBuf::from("DejaVuSans-Bold.ttf"),
            italic: PathBuf::from("DejaVuSans-Oblique.ttf"),
        }
    }
}

impl FontFiles {
    /// The default DejaVu file names, resolved against `base_dir`
    pub fn in_dir<P: AsRef<Path>>(base_dir: P) -> FontFiles {
        FontFiles {
            base_dir: base_dir.as_ref().to_path_buf(),
            ..FontFiles::default()
        }
    }

    /// Full path of the file for `style`
    pub fn path(&self, style: FontStyle) -> PathBuf {
        let file = match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        };
        self.base_dir.join(file)
    }
}

/// One face per [FontStyle]. Either all three are embedded TrueType fonts, or all three are
/// the builtin Helvetica family; the two are never mixed.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub regular: Face,
    pub bold: Face,
    pub italic: Face,
}

impl FontSet {
    /// The builtin Helvetica family. Text drawn with it is restricted to Latin-1.
    pub fn builtin() -> FontSet {
        FontSet {
            regular: Face::Builtin(BuiltinFont::Helvetica),
            bold: Face::Builtin(BuiltinFont::HelveticaBold),
            italic: Face::Builtin(BuiltinFont::HelveticaOblique),
        }
    }

    /// Load the TrueType family described by `files`, falling back to [FontSet::builtin]
    /// if any of the three is missing or unreadable. A missing font is never an error.
    pub fn load(files: &FontFiles) -> FontSet {
        match FontSet::try_load(files) {
            Ok(set) => {
                tracing::debug!(dir = %files.base_dir.display(), "loaded embedded font family");
                set
            }
            Err(err) => {
                tracing::warn!(
                    dir = %files.base_dir.display(),
                    error = %err,
                    "font family unavailable, falling back to builtin Helvetica"
                );
                FontSet::builtin()
            }
        }
    }

    /// Load the TrueType family described by `files`, failing if any face can't be read
    pub fn try_load(files: &FontFiles) -> Result<FontSet, crate::PDFError> {
        let load = |style| -> Result<Face, crate::PDFError> {
            let font = Font::load_from_path(files.path(style))?;
            Ok(Face::Embedded(Arc::new(font)))
        };

        Ok(FontSet {
            regular: load(FontStyle::Regular)?,
            bold: load(FontStyle::Bold)?,
            italic: load(FontStyle::Italic)?,
        })
    }

    /// The face drawn for `style`
    pub fn face(&self, style: FontStyle) -> &Face {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }

    /// Whether text must be restricted to ASCII-safe characters before drawing
    pub fn is_builtin(&self) -> bool {
        self.regular.is_builtin()
    }
}

impl Default for FontSet {
    fn default() -> Self {
        FontSet::load(&FontFiles::default())
    }
}
