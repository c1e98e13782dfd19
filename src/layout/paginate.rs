use crate::blocks::Block;
use crate::classify::ClassifiedLine;
use crate::config::LayoutConfig;
use crate::layout::render::Renderer;
use crate::page::Page;
use crate::units::Pt;

/// Where the paginator is on the page, and how many pages it has started
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    /// Distance from the top of the current page's content box
    pub offset: Pt,
    /// 0-based index of the page being filled
    pub page_index: usize,
    pub pages: usize,
    pub footer_emitted: bool,
}

impl Default for PageCursor {
    fn default() -> Self {
        PageCursor {
            offset: Pt(0.0),
            page_index: 0,
            pages: 1,
            footer_emitted: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Measuring,
    Drawing,
    PageBreak,
    Trimming,
    Done,
}

/// The next block to place, and how many of its lines have already been drawn. Everything
/// before `block` has been drawn (or dropped) in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Position {
    block: usize,
    line: usize,
}

impl Position {
    fn next_block(self) -> Position {
        Position {
            block: self.block + 1,
            line: 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Part<'b> {
    Spacer,
    Contact(&'b ClassifiedLine),
    Heading(&'b ClassifiedLine),
    Subheading(&'b ClassifiedLine),
    /// A single paragraph or bulleted line
    Line(&'b ClassifiedLine),
}

/// Parts that must land on the same page, and the position after drawing them
#[derive(Debug)]
struct Unit<'b> {
    parts: Vec<Part<'b>>,
    next: Position,
}

/// The laid out pages, and whether anything was left out to respect the page cap
#[derive(Debug)]
pub struct Pagination {
    pub pages: Vec<Page>,
    pub truncated: bool,
}

/// Places blocks on pages, measuring each keep-together unit before drawing it
pub struct Paginator<'a> {
    config: &'a LayoutConfig,
    renderer: Renderer<'a>,
}

impl<'a> Paginator<'a> {
    /// `renderer` must draw with the same `config`
    pub fn new(config: &'a LayoutConfig, renderer: Renderer<'a>) -> Paginator<'a> {
        Paginator { config, renderer }
    }

    fn new_page(&self) -> Page {
        Page::new(self.config.page_size, Some(self.config.margins))
    }

    /// Lay out `blocks` in order onto at most [LayoutConfig::page_cap] pages. Always returns
    /// at least one page.
    pub fn paginate(&self, blocks: &[Block]) -> Pagination {
        let cap = self.config.page_cap();
        let page_height = self.config.content_height();
        let trim_threshold = self.config.body_line_height * self.config.trim_threshold_lines;
        let footer_height = self.renderer.measure_footer();

        let mut pages: Vec<Page> = vec![self.new_page()];
        let mut cursor = PageCursor::default();
        let mut position = Position::default();
        let mut pending: Option<Unit> = None;
        let mut truncated = false;
        let mut state = State::Measuring;

        loop {
            state = match state {
                State::Measuring => {
                    position = settle(blocks, position);
                    let Some(block) = blocks.get(position.block) else {
                        break;
                    };

                    let page_is_fresh = cursor.offset <= Pt(0.0);
                    if page_is_fresh && cursor.page_index > 0 && matches!(block, Block::Spacer) {
                        position = position.next_block();
                        continue;
                    }

                    let remaining = page_height - cursor.offset;
                    let on_last_page = cursor.pages >= cap;
                    if on_last_page
                        && !page_is_fresh
                        && remaining <= trim_threshold
                        && has_content(blocks, position)
                    {
                        tracing::debug!(
                            page = cursor.page_index + 1,
                            remaining = %remaining,
                            "last page nearly full, trimming"
                        );
                        State::Trimming
                    } else {
                        match unit_at(blocks, position) {
                            None => {
                                position = position.next_block();
                                State::Measuring
                            }
                            Some(unit) => {
                                // on the last page, leave room for the footer unless this is
                                // the last of the content
                                let reserve = if on_last_page
                                    && has_content(blocks, settle(blocks, unit.next))
                                {
                                    footer_height
                                } else {
                                    Pt(0.0)
                                };
                                let height = self.measure(&unit);
                                if height + reserve <= remaining || page_is_fresh {
                                    pending = Some(unit);
                                    State::Drawing
                                } else if !on_last_page {
                                    State::PageBreak
                                } else {
                                    tracing::debug!(
                                        page = cursor.page_index + 1,
                                        needed = %height,
                                        remaining = %remaining,
                                        "page cap reached, trimming"
                                    );
                                    State::Trimming
                                }
                            }
                        }
                    }
                }
                State::Drawing => {
                    if let Some(unit) = pending.take() {
                        let page = &mut pages[cursor.page_index];
                        let drawn = self.draw(page, cursor.offset, &unit);
                        tracing::trace!(
                            page = cursor.page_index + 1,
                            top = %cursor.offset,
                            height = %drawn,
                            parts = unit.parts.len(),
                            "drew unit"
                        );
                        cursor.offset += drawn;
                        position = unit.next;
                    }
                    State::Measuring
                }
                State::PageBreak => {
                    pages.push(self.new_page());
                    cursor.page_index = pages.len() - 1;
                    cursor.pages = pages.len();
                    cursor.offset = Pt(0.0);
                    tracing::debug!(page = cursor.pages, "started new page");
                    State::Measuring
                }
                State::Trimming => {
                    if !cursor.footer_emitted && has_content(blocks, position) {
                        if cursor.offset + footer_height > page_height {
                            tracing::warn!(
                                page = cursor.page_index + 1,
                                overflow = %(cursor.offset + footer_height - page_height),
                                "footer extends into the bottom margin"
                            );
                        }
                        let page = &mut pages[cursor.page_index];
                        cursor.offset += self.renderer.draw_footer(page, cursor.offset);
                        cursor.footer_emitted = true;
                        truncated = true;
                    }
                    State::Done
                }
                State::Done => break,
            };
        }

        Pagination { pages, truncated }
    }

    fn measure(&self, unit: &Unit) -> Pt {
        unit.parts
            .iter()
            .map(|part| match part {
                Part::Spacer => self.renderer.measure_spacer(),
                Part::Contact(line) => self.renderer.measure_contact(line),
                Part::Heading(line) => self.renderer.measure_heading(line),
                Part::Subheading(line) => self.renderer.measure_subheading(line),
                Part::Line(line) => self.renderer.measure_body(line),
            })
            .sum()
    }

    fn draw(&self, page: &mut Page, top: Pt, unit: &Unit) -> Pt {
        let mut offset = top;
        for part in unit.parts.iter() {
            offset += match part {
                Part::Spacer => self.renderer.measure_spacer(),
                Part::Contact(line) => self.renderer.draw_contact(page, offset, line),
                Part::Heading(line) => self.renderer.draw_heading(page, offset, line),
                Part::Subheading(line) => self.renderer.draw_subheading(page, offset, line),
                Part::Line(line) => self.renderer.draw_body(page, offset, line),
            };
        }
        offset - top
    }
}

/// Skip past blocks whose lines have all been drawn
fn settle(blocks: &[Block], mut position: Position) -> Position {
    while let Some(block) = blocks.get(position.block) {
        if position.line < block.line_count().max(1) {
            break;
        }
        position = position.next_block();
    }
    position
}

/// Whether anything other than spacing remains from `position` on
fn has_content(blocks: &[Block], position: Position) -> bool {
    blocks
        .get(position.block..)
        .is_some_and(|rest| rest.iter().any(|block| !matches!(block, Block::Spacer)))
}

/// If `position` is at a group, take its first line along with whatever came before it
fn peel_first_line<'b>(blocks: &'b [Block], position: Position, parts: &mut Vec<Part<'b>>) -> Position {
    match blocks.get(position.block) {
        Some(Block::Group(lines)) if !lines.is_empty() => {
            parts.push(Part::Line(&lines[0]));
            Position {
                block: position.block,
                line: 1,
            }
        }
        _ => position,
    }
}

/// Build the keep-together unit starting at `position`: a heading with its subheading and
/// the first line of that subheading's group, a subheading with the first line of its group,
/// or a single line
fn unit_at(blocks: &[Block], position: Position) -> Option<Unit<'_>> {
    let after = position.next_block();
    let unit = match blocks.get(position.block)? {
        Block::Spacer => Unit {
            parts: vec![Part::Spacer],
            next: after,
        },
        Block::Contact(line) => Unit {
            parts: vec![Part::Contact(line)],
            next: after,
        },
        Block::Heading(line) => {
            let mut parts = vec![Part::Heading(line)];
            let next = match blocks.get(after.block) {
                Some(Block::Subheading(subheading)) => {
                    parts.push(Part::Subheading(subheading));
                    peel_first_line(blocks, after.next_block(), &mut parts)
                }
                _ => after,
            };
            Unit { parts, next }
        }
        Block::Subheading(line) => {
            let mut parts = vec![Part::Subheading(line)];
            let next = peel_first_line(blocks, after, &mut parts);
            Unit { parts, next }
        }
        Block::Group(lines) => Unit {
            parts: vec![Part::Line(lines.get(position.line)?)],
            next: Position {
                block: position.block,
                line: position.line + 1,
            },
        },
        Block::Paragraph(line) => Unit {
            parts: vec![Part::Line(line)],
            next: after,
        },
    };
    Some(unit)
}
