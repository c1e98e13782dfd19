use crate::classify::{ClassifiedLine, Role};
use crate::colour::Colour;
use crate::config::LayoutConfig;
use crate::document::Document;
use crate::face::{Face, FontSet, FontStyle};
use crate::layout::text::{
    baseline_offset, width_of_text, wrap_hanging_bullet, wrap_line_count, wrap_text, WrappedLine,
};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::units::Pt;
use id_arena::Id;

/// Document-level ids of the three faces of a [FontSet]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontIds {
    pub regular: Id<Face>,
    pub bold: Id<Face>,
    pub italic: Id<Face>,
}

impl FontIds {
    /// Add every face of `fonts` to the document
    pub fn register(document: &mut Document, fonts: &FontSet) -> FontIds {
        FontIds {
            regular: document.add_font(fonts.regular.clone()),
            bold: document.add_font(fonts.bold.clone()),
            italic: document.add_font(fonts.italic.clone()),
        }
    }

    /// The id of the face drawn for `style`
    pub fn get(&self, style: FontStyle) -> Id<Face> {
        match style {
            FontStyle::Regular => self.regular,
            FontStyle::Bold => self.bold,
            FontStyle::Italic => self.italic,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
enum Align {
    Left,
    Centre,
    /// Stretch inter-word space to fill the line, except on the final line
    Justify,
}

/// Draw primitives, one per kind of line. Every `measure_*` returns exactly the height the
/// matching `draw_*` advances by, so the paginator can decide placement before drawing.
///
/// `top` is always the distance from the top of the page's content box to the top of the
/// line box being drawn.
pub struct Renderer<'a> {
    config: &'a LayoutConfig,
    fonts: &'a FontSet,
    ids: FontIds,
}

impl<'a> Renderer<'a> {
    /// `ids` must be the ids `fonts` was registered under in the document being drawn
    pub fn new(config: &'a LayoutConfig, fonts: &'a FontSet, ids: FontIds) -> Renderer<'a> {
        Renderer { config, fonts, ids }
    }

    fn face(&self, style: FontStyle) -> &'a Face {
        self.fonts.face(style)
    }

    fn content_width(&self) -> Pt {
        self.config.content_width()
    }

    fn wrap<'t>(&self, text: &'t str, width: Pt, style: FontStyle, size: Pt) -> Vec<WrappedLine<'t>> {
        wrap_text(text, width, width, self.face(style), size)
    }

    fn line_count(&self, text: &str, style: FontStyle, size: Pt) -> usize {
        wrap_line_count(text, self.content_width(), self.face(style), size)
    }

    /// A blank line: one body line of space, nothing drawn
    pub fn measure_spacer(&self) -> Pt {
        self.config.body_line_height
    }

    /// Wrapped contact lines plus the body line of space below them
    pub fn measure_contact(&self, line: &ClassifiedLine) -> Pt {
        let count = self.line_count(line.content(), FontStyle::Bold, self.config.contact_size);
        self.config.contact_line_height * count as f32 + self.config.body_line_height
    }

    /// Wrapped heading lines plus the heading gap
    pub fn measure_heading(&self, line: &ClassifiedLine) -> Pt {
        let count = self.line_count(line.content(), FontStyle::Bold, self.config.heading_size);
        self.config.heading_line_height * count as f32 + self.config.heading_gap
    }

    /// Wrapped subheading lines plus the subheading gap
    pub fn measure_subheading(&self, line: &ClassifiedLine) -> Pt {
        let count = self.line_count(
            line.content(),
            FontStyle::Italic,
            self.config.subheading_size,
        );
        self.config.heading_line_height * count as f32 + self.config.subheading_gap
    }

    /// Height of a paragraph or bulleted line, including the paragraph gap
    pub fn measure_body(&self, line: &ClassifiedLine) -> Pt {
        let face = self.face(FontStyle::Regular);
        let size = self.config.body_size;
        let available = self.body_width(line);
        let count = match &line.role {
            Role::Bullet(_) => {
                wrap_hanging_bullet(line.content(), available, available, face, size)
            }
            _ => wrap_line_count(line.content(), available, face, size),
        };
        self.config.body_line_height * count as f32 + self.config.paragraph_gap
    }

    /// The single line the trimming footer takes
    pub fn measure_footer(&self) -> Pt {
        self.config.body_line_height
    }

    /// Draw the contact line bold and centred. Returns the height consumed.
    pub fn draw_contact(&self, page: &mut Page, top: Pt, line: &ClassifiedLine) -> Pt {
        let size = self.config.contact_size;
        let lines = self.wrap(line.content(), self.content_width(), FontStyle::Bold, size);
        let line_height = self.config.contact_line_height;
        self.draw_lines(page, top, &lines, FontStyle::Bold, size, line_height, Pt(0.0), Align::Centre);
        line_height * lines.len() as f32 + self.config.body_line_height
    }

    /// Draw a heading bold and left aligned. Returns the height consumed.
    pub fn draw_heading(&self, page: &mut Page, top: Pt, line: &ClassifiedLine) -> Pt {
        let size = self.config.heading_size;
        let lines = self.wrap(line.content(), self.content_width(), FontStyle::Bold, size);
        let line_height = self.config.heading_line_height;
        self.draw_lines(page, top, &lines, FontStyle::Bold, size, line_height, Pt(0.0), Align::Left);
        line_height * lines.len() as f32 + self.config.heading_gap
    }

    /// Draw a subheading in italics, left aligned. Returns the height consumed.
    pub fn draw_subheading(&self, page: &mut Page, top: Pt, line: &ClassifiedLine) -> Pt {
        let size = self.config.subheading_size;
        let lines = self.wrap(line.content(), self.content_width(), FontStyle::Italic, size);
        let line_height = self.config.heading_line_height;
        self.draw_lines(page, top, &lines, FontStyle::Italic, size, line_height, Pt(0.0), Align::Left);
        line_height * lines.len() as f32 + self.config.subheading_gap
    }

    /// Draw a paragraph line (indented by its leading spaces) or a bulleted line (symbol at
    /// the indent, content hanging one space after it), justified
    pub fn draw_body(&self, page: &mut Page, top: Pt, line: &ClassifiedLine) -> Pt {
        let (text_offset, lines) = self.body_lines(line);
        let size = self.config.body_size;
        let line_height = self.config.body_line_height;

        if let Role::Bullet(bullet) = &line.role {
            let token_face = self.face(FontStyle::Regular);
            let bullet_size = self.config.bullet_size;
            let x = page.content_box.x1 + self.bullet_offset(bullet.indent);
            let y = page.content_box.y2
                - top
                - baseline_offset(token_face, bullet_size, line_height);
            page.add_span(SpanLayout {
                text: bullet.token(),
                font: SpanFont {
                    id: self.ids.regular,
                    size: bullet_size,
                },
                colour: self.config.text_colour,
                coords: (x, y),
            });
        }

        self.draw_lines(page, top, &lines, FontStyle::Regular, size, line_height, text_offset, Align::Justify);
        line_height * lines.len() as f32 + self.config.paragraph_gap
    }

    /// The trimming note, set in the footer colour
    pub fn draw_footer(&self, page: &mut Page, top: Pt) -> Pt {
        let size = self.config.body_size;
        let line_height = self.config.body_line_height;
        let face = self.face(FontStyle::Italic);
        let y = page.content_box.y2 - top - baseline_offset(face, size, line_height);
        self.push_span(
            page,
            self.config.footer.clone(),
            FontStyle::Italic,
            size,
            self.config.footer_colour,
            (page.content_box.x1, y),
        );
        self.measure_footer()
    }

    fn bullet_offset(&self, indent: usize) -> Pt {
        let face = self.face(FontStyle::Regular);
        self.config.bullet_indent + width_of_text(&" ".repeat(indent), face, self.config.body_size)
    }

    /// Where the text of a body line starts, relative to the left margin. Continuation lines
    /// of a bullet align under the start of its text.
    fn text_offset(&self, line: &ClassifiedLine) -> Pt {
        let face = self.face(FontStyle::Regular);
        let size = self.config.body_size;
        match &line.role {
            Role::Bullet(bullet) => {
                let token_width = width_of_text(&bullet.token(), face, self.config.bullet_size);
                self.bullet_offset(bullet.indent) + token_width + width_of_text(" ", face, size)
            }
            _ => width_of_text(&" ".repeat(line.leading_spaces()), face, size),
        }
    }

    fn body_width(&self, line: &ClassifiedLine) -> Pt {
        (self.content_width() - self.text_offset(line)).max(Pt(0.0))
    }

    fn body_lines<'l>(&self, line: &'l ClassifiedLine) -> (Pt, Vec<WrappedLine<'l>>) {
        let available = self.body_width(line);
        let lines = wrap_text(
            line.content(),
            available,
            available,
            self.face(FontStyle::Regular),
            self.config.body_size,
        );
        (self.text_offset(line), lines)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_lines(
        &self,
        page: &mut Page,
        top: Pt,
        lines: &[WrappedLine],
        style: FontStyle,
        size: Pt,
        line_height: Pt,
        offset: Pt,
        align: Align,
    ) {
        let face = self.face(style);
        let space_width = width_of_text(" ", face, size);
        let left = page.content_box.x1 + offset;
        let available = page.content_box.x2 - left;

        for (i, line) in lines.iter().enumerate() {
            if line.words.is_empty() {
                continue;
            }
            let line_top = top + line_height * i as f32;
            let y = page.content_box.y2 - line_top - baseline_offset(face, size, line_height);
            let is_last = i + 1 == lines.len();

            match align {
                Align::Justify if !is_last && line.words.len() > 1 => {
                    // spring the spaces so the line spans the full width
                    let gap = (available - line.words_width) / (line.words.len() - 1) as f32;
                    let mut x = left;
                    for word in line.words.iter() {
                        self.push_span(
                            page,
                            word.to_string(),
                            style,
                            size,
                            self.config.text_colour,
                            (x, y),
                        );
                        x += width_of_text(word, face, size) + gap;
                    }
                }
                Align::Centre => {
                    let x = left + (available - line.natural_width(space_width)) / 2.0;
                    self.push_span(page, line.text(), style, size, self.config.text_colour, (x, y));
                }
                _ => {
                    self.push_span(page, line.text(), style, size, self.config.text_colour, (left, y));
                }
            }
        }
    }

    fn push_span(
        &self,
        page: &mut Page,
        text: String,
        style: FontStyle,
        size: Pt,
        colour: Colour,
        coords: (Pt, Pt),
    ) {
        page.add_span(SpanLayout {
            text,
            font: SpanFont {
                id: self.ids.get(style),
                size,
            },
            colour,
            coords,
        });
    }
}
