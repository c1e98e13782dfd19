//! Every tunable the layout engine consults, in one place.
//!
//! Defaults reproduce a compact single-column resume on A4: 16mm side and top margins,
//! 10.5pt body text, and a hard cap of two pages.

use crate::colour::{colours, Colour};
use crate::face::FontFiles;
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::units::{Mm, Pt};

/// The footer drawn once when content has to be dropped to respect the page cap
pub const DEFAULT_FOOTER: &str = "Additional details available on request.";

/// Resume section names that are always treated as headings, whatever their shape
pub const DEFAULT_SECTION_NAMES: &[&str] = &[
    "SUMMARY",
    "PROFILE",
    "KEY SKILLS",
    "SKILLS",
    "CAPABILITIES",
    "EDUCATION",
    "PROJECTS",
    "SELECTED PROJECTS",
    "EXPERIENCE",
    "WORK HISTORY",
    "ADDITIONAL",
    "INTERESTS",
];

/// Month abbreviations that mark a line as a dated role line
pub const DEFAULT_MONTH_NAMES: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Thresholds used to decide what role a line of text plays
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassifierConfig {
    /// An all-caps line is a heading when its length in characters falls in this range
    pub heading_min_chars: usize,
    pub heading_max_chars: usize,
    /// A line ending in `:` is a heading when it is at most this many characters long
    pub colon_heading_max_chars: usize,
    /// Word-count range for the capitalisation rule of subheadings (inclusive)
    pub subheading_min_words: usize,
    pub subheading_max_words: usize,
    /// Share of capitalised words a line must exceed to count as a subheading
    pub capitalized_ratio: f32,
    /// A four-digit number in this range (inclusive) marks a line as a subheading
    pub year_min: u32,
    pub year_max: u32,
    /// Words that mark a line as a subheading, matched whole and case-insensitively
    pub month_names: Vec<String>,
    /// Known section names, matched case-insensitively
    pub section_names: Vec<String>,
    /// Check [ClassifierConfig::section_names] before the generic heading rules
    pub match_section_names: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            heading_min_chars: 3,
            heading_max_chars: 40,
            colon_heading_max_chars: 40,
            subheading_min_words: 5,
            subheading_max_words: 16,
            capitalized_ratio: 0.5,
            year_min: 1900,
            year_max: 2099,
            month_names: DEFAULT_MONTH_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            section_names: DEFAULT_SECTION_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            match_section_names: true,
        }
    }
}

/// Page geometry, typography, and limits for one rendered document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margins: Margins,

    pub body_size: Pt,
    /// Size of the bullet symbol drawn before a bulleted line
    pub bullet_size: Pt,
    pub heading_size: Pt,
    pub subheading_size: Pt,
    pub contact_size: Pt,

    pub body_line_height: Pt,
    /// Line height of headings and subheadings
    pub heading_line_height: Pt,
    pub contact_line_height: Pt,

    /// Space after every paragraph line and bulleted line
    pub paragraph_gap: Pt,
    pub subheading_gap: Pt,
    pub heading_gap: Pt,
    /// Extra left offset of every bullet symbol, on top of the line's own leading spaces
    pub bullet_indent: Pt,

    /// Hard maximum number of pages; never less than 1
    pub max_pages: usize,
    pub footer: String,
    /// On the last page, stop and draw the footer once no more than this many body lines
    /// of space remain
    pub trim_threshold_lines: f32,

    pub text_colour: Colour,
    pub footer_colour: Colour,

    pub fonts: FontFiles,
    pub classifier: ClassifierConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let body_line_height: Pt = Mm(5.5).into();
        LayoutConfig {
            page_size: pagesize::A4,
            margins: Margins::trbl(Mm(16.0), Mm(16.0), Mm(20.0), Mm(16.0)),

            body_size: Pt(10.5),
            bullet_size: Pt(9.5),
            heading_size: Pt(11.5),
            subheading_size: Pt(11.0),
            contact_size: Pt(13.0),

            body_line_height,
            heading_line_height: Mm(6.0).into(),
            contact_line_height: body_line_height + Mm(1.0).into(),

            paragraph_gap: Mm(1.0).into(),
            subheading_gap: Mm(2.0).into(),
            heading_gap: Mm(2.0).into(),
            bullet_indent: Pt(0.0),

            max_pages: 2,
            footer: DEFAULT_FOOTER.to_string(),
            trim_threshold_lines: 2.0,

            text_colour: colours::BLACK,
            footer_colour: colours::MID_GREY,

            fonts: FontFiles::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Set the page cap
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the paper size
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set where the TrueType family is loaded from
    pub fn with_fonts(mut self, fonts: FontFiles) -> Self {
        self.fonts = fonts;
        self
    }

    /// The page cap actually enforced
    pub fn page_cap(&self) -> usize {
        self.max_pages.max(1)
    }

    /// Width available to text between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.page_size.0 - self.margins.left - self.margins.right
    }

    /// Height available to text between the top and bottom margins
    pub fn content_height(&self) -> Pt {
        self.page_size.1 - self.margins.top - self.margins.bottom
    }
}
