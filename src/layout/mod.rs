//! Measuring, drawing, and paginating resume text.
//!
//! - [text](crate::layout::text) measures strings and wraps them into visual lines
//! - [render](crate::layout::render) draws one kind of line at a given offset on a page, and
//!   measures exactly what it would draw
//! - [paginate](crate::layout::paginate) walks the assembled blocks, keeps headings with the
//!   first line below them, and enforces the page cap
//!
//! # Example
//!
//! ```
//! use resume_pdf::blocks::assemble;
//! use resume_pdf::classify::Classifier;
//! use resume_pdf::config::LayoutConfig;
//! use resume_pdf::layout::{FontIds, Paginator, Renderer};
//! use resume_pdf::{Document, FontSet};
//!
//! let config = LayoutConfig::default();
//! let fonts = FontSet::builtin();
//! let mut doc = Document::default();
//! let ids = FontIds::register(&mut doc, &fonts);
//!
//! let lines = Classifier::new(&config.classifier, true).classify_lines("Jane Doe\n\nSKILLS\n- Rust");
//! let blocks = assemble(lines);
//!
//! let pagination = Paginator::new(&config, Renderer::new(&config, &fonts, ids)).paginate(&blocks);
//! for page in pagination.pages {
//!     doc.add_page(page);
//! }
//! assert_eq!(doc.page_count(), 1);
//! ```

mod margins;
pub mod paginate;
pub mod render;
pub mod text;

pub use margins::*;
pub use paginate::*;
pub use render::*;
pub use text::*;
