use crate::{
    face::Face,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Pdf, Ref};
use std::io::Write;

#[derive(Default, Debug)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Vec<Page>,
    pub fonts: Arena<Face>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its 0-based index
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Add a font to the document structure. Fonts are stored "globally" within the
    /// document, such that any page can refer to a font by the returned id.
    pub fn add_font(&mut self, font: Face) -> Id<Face> {
        self.fonts.alloc(font)
    }

    /// Number of pages added so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Write the entire document to the writer. The document is "rendered" in memory first
    /// and then written out in one go. Object ids are only assigned here, so writing the same
    /// document twice produces identical bytes.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document { info, pages, fonts } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..pages.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id.index(), &mut writer);
        }

        for (page_index, page) in pages.iter().enumerate() {
            page.write(&mut refs, page_index, &fonts, &mut writer)?;
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    /// Write the document into a freshly allocated buffer
    pub fn to_bytes(self) -> Result<Vec<u8>, PDFError> {
        let mut bytes: Vec<u8> = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::BuiltinFont;
    use crate::{colours, pagesize, Pt, SpanFont, SpanLayout};

    #[test]
    fn writes_a_parseable_document() {
        let mut doc = Document::default();
        doc.set_info(Info::new().title("Hello").clone());
        let font = doc.add_font(Face::Builtin(BuiltinFont::Helvetica));

        for text in ["first", "second"] {
            let mut page = Page::new(pagesize::A4, None);
            page.add_span(SpanLayout {
                text: text.to_string(),
                font: SpanFont {
                    id: font,
                    size: Pt(12.0),
                },
                colour: colours::BLACK,
                coords: (Pt(72.0), Pt(720.0)),
            });
            doc.add_page(page);
        }

        let bytes = doc.to_bytes().expect("can write");
        assert!(bytes.starts_with(b"%PDF-"));

        let parsed = lopdf::Document::load_mem(&bytes).expect("output parses");
        assert_eq!(parsed.get_pages().len(), 2);
    }
}
