//! Lays out plain resume text (a contact line, section headings, role lines, bullets, and
//! paragraphs) into a PDF that never exceeds a fixed number of pages.
//!
//! ```
//! use resume_pdf::{Engine, FontSet, Rendered};
//! use resume_pdf::config::LayoutConfig;
//!
//! let engine = Engine::new(LayoutConfig::default(), FontSet::builtin());
//! let rendered = engine
//!     .render("Jane Doe\n\nSKILLS\n- Rust\n- PDF", "Jane Doe")
//!     .expect("can render");
//! assert_eq!(rendered.page_count, 1);
//! assert_eq!(Rendered::CONTENT_TYPE, "application/pdf");
//! ```

pub mod blocks;
pub mod classify;
pub mod config;

pub mod layout;

pub mod pagesize;

mod builtin;
pub use builtin::*;

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod face;
pub use face::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

mod page;
pub use page::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
