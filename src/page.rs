use crate::colour::Colour;
use crate::content::render_spans;
use crate::face::Face;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};

/// Which font (by its id within the document) and at what size a span is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Face>,
    pub size: Pt,
}

/// A run of text positioned at a baseline origin on the page
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    /// Baseline origin, in PDF user space (y grows upwards from the bottom of the page)
    pub coords: (Pt, Pt),
}

/// A single page of the document and the text spans laid out on it
#[derive(Debug, Clone)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out text
    pub contents: Vec<SpanLayout>,
}

impl Page {
    /// Create a new empty page of the given size. Margins only determine the page's
    /// content box; nothing stops spans from being placed outside of it.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    /// Place a span; spans are drawn in the order they were added
    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(span);
    }

    /// Whether nothing has been drawn on the page yet
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Face>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(PDFError::PageMissing)?;
        let page_tree_id = refs.get(RefType::PageTree).ok_or(PDFError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_spans(&self.contents, fonts)?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}
