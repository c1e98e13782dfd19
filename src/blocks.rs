//! Groups classified lines into the blocks the paginator places.

use crate::classify::{ClassifiedLine, Role};

/// A run of classified lines laid out as a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Spacer,
    Contact(ClassifiedLine),
    Heading(ClassifiedLine),
    Subheading(ClassifiedLine),
    /// The lines directly below a subheading, up to the next blank line, heading, or
    /// subheading. Always immediately follows its [Block::Subheading].
    Group(Vec<ClassifiedLine>),
    /// A bullet or paragraph line that doesn't belong to a subheading
    Paragraph(ClassifiedLine),
}

impl Block {
    /// Number of content lines the block holds
    pub fn line_count(&self) -> usize {
        match self {
            Block::Spacer => 0,
            Block::Group(lines) => lines.len(),
            _ => 1,
        }
    }
}

fn ends_group(line: &ClassifiedLine) -> bool {
    matches!(line.role, Role::Spacer | Role::Heading | Role::Subheading)
}

/// Group classified lines into blocks in a single left-to-right pass, preserving order
pub fn assemble(lines: Vec<ClassifiedLine>) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::with_capacity(lines.len());
    let mut lines = lines.into_iter().peekable();

    while let Some(line) = lines.next() {
        match line.role {
            Role::Spacer => blocks.push(Block::Spacer),
            Role::Contact => blocks.push(Block::Contact(line)),
            Role::Heading => blocks.push(Block::Heading(line)),
            Role::Subheading => {
                blocks.push(Block::Subheading(line));

                let mut group: Vec<ClassifiedLine> = Vec::new();
                while let Some(next) = lines.next_if(|next| !ends_group(next)) {
                    group.push(next);
                }
                if !group.is_empty() {
                    blocks.push(Block::Group(group));
                }
            }
            Role::Bullet(_) | Role::Paragraph => blocks.push(Block::Paragraph(line)),
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;
    use crate::config::ClassifierConfig;
    use pretty_assertions::assert_eq;

    fn blocks_of(text: &str) -> Vec<Block> {
        let config = ClassifierConfig::default();
        assemble(Classifier::new(&config, false).classify_lines(text))
    }

    fn shape(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .map(|block| match block {
                Block::Spacer => "spacer".to_string(),
                Block::Contact(_) => "contact".to_string(),
                Block::Heading(_) => "heading".to_string(),
                Block::Subheading(_) => "subheading".to_string(),
                Block::Group(lines) => format!("group({})", lines.len()),
                Block::Paragraph(_) => "paragraph".to_string(),
            })
            .collect()
    }

    #[test]
    fn subheading_absorbs_following_lines() {
        let blocks = blocks_of(
            "Jane Doe\n\nEXPERIENCE\nSenior Engineer | Acme Corp | 2020-2023\n● Led a team of 5\n● Shipped X\nand more besides\n\nLoose paragraph line",
        );
        assert_eq!(
            shape(&blocks),
            vec![
                "contact",
                "spacer",
                "heading",
                "subheading",
                "group(3)",
                "spacer",
                "paragraph"
            ]
        );
        let Block::Group(lines) = &blocks[4] else {
            panic!("expected a group");
        };
        assert_eq!(lines[2].content(), "and more besides");
    }

    #[test]
    fn groups_stop_at_headings_and_subheadings() {
        let blocks = blocks_of(
            "Jane Doe\nAcme | Engineer\n- one\nBeta | Lead\n- two\nEDUCATION\n- three",
        );
        assert_eq!(
            shape(&blocks),
            vec![
                "contact",
                "subheading",
                "group(1)",
                "subheading",
                "group(1)",
                "heading",
                "paragraph"
            ]
        );
    }

    #[test]
    fn subheading_without_content_has_no_group() {
        let blocks = blocks_of("Jane Doe\nAcme | Engineer\n\nSKILLS");
        assert_eq!(
            shape(&blocks),
            vec!["contact", "subheading", "spacer", "heading"]
        );
    }

    #[test]
    fn every_line_lands_in_exactly_one_block() {
        let text = "Jane Doe\n\nSUMMARY\nWrites software.\n\nEXPERIENCE\nAcme | Engineer\n- a\n- b\n\n- c";
        let blocks = blocks_of(text);
        let placed: usize = blocks
            .iter()
            .map(|block| match block {
                Block::Spacer => 1,
                other => other.line_count(),
            })
            .sum();
        assert_eq!(placed, text.lines().count());
    }
}
