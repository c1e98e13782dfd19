use crate::blocks::assemble;
use crate::builtin::sanitize_ascii;
use crate::classify::Classifier;
use crate::config::LayoutConfig;
use crate::document::Document;
use crate::face::FontSet;
use crate::info::Info;
use crate::layout::{FontIds, Paginator, Renderer};
use crate::PDFError;

/// A rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Whether content was dropped (and the footer drawn) to respect the page cap
    pub truncated: bool,
}

impl Rendered {
    pub const CONTENT_TYPE: &'static str = "application/pdf";
}

/// Turns plain resume text into a PDF. Holds the configuration and the loaded fonts, so one
/// engine can render any number of documents; rendering never mutates it.
#[derive(Debug, Clone)]
pub struct Engine {
    pub config: LayoutConfig,
    pub fonts: FontSet,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::from_config(LayoutConfig::default())
    }
}

impl Engine {
    /// An engine drawing with an already loaded font set
    pub fn new(config: LayoutConfig, fonts: FontSet) -> Engine {
        Engine { config, fonts }
    }

    /// Load the fonts named by `config`, falling back to the builtin family if they can't be
    /// read
    pub fn from_config(config: LayoutConfig) -> Engine {
        let fonts = FontSet::load(&config.fonts);
        Engine { config, fonts }
    }

    /// Classify, assemble, paginate, and draw `text`. `title` only ends up in the document
    /// information dictionary.
    pub fn render(&self, text: &str, title: &str) -> Result<Rendered, PDFError> {
        let ascii = self.fonts.is_builtin();
        let mut text = normalize(text);
        if ascii {
            text = sanitize_ascii(&text);
        }

        let lines = Classifier::new(&self.config.classifier, ascii).classify_lines(&text);
        let line_count = lines.len();
        let blocks = assemble(lines);

        let mut document = Document::default();
        document.set_info(Info::new().title(title).clone());
        let ids = FontIds::register(&mut document, &self.fonts);

        let renderer = Renderer::new(&self.config, &self.fonts, ids);
        let pagination = Paginator::new(&self.config, renderer).paginate(&blocks);
        for page in pagination.pages {
            document.add_page(page);
        }

        let page_count = document.page_count();
        let bytes = document.to_bytes()?;
        tracing::info!(
            lines = line_count,
            blocks = blocks.len(),
            pages = page_count,
            truncated = pagination.truncated,
            builtin_fonts = ascii,
            size = bytes.len(),
            "rendered document"
        );

        Ok(Rendered {
            bytes,
            page_count,
            truncated: pagination.truncated,
        })
    }
}

/// Render `text` with the default configuration and fonts
pub fn text_to_pdf_bytes(text: &str, title: &str) -> Result<Vec<u8>, PDFError> {
    Engine::default()
        .render(text, title)
        .map(|rendered| rendered.bytes)
}

/// Line endings to `\n`, tabs to four spaces, and em dashes to en dashes
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', "    ")
        .replace('\u{2014}', "\u{2013}")
}
