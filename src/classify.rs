//! Decides what role each physical line of the input plays.
//!
//! Classification looks at one line at a time. The only positional input is whether the
//! line is the first non-blank one, which always becomes the contact line.

use crate::config::ClassifierConfig;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BULLET: Regex =
        Regex::new(r"^(\s*)([●•\-\*])\s+(.*)$").expect("bullet pattern is valid");
    static ref FOUR_DIGITS: Regex =
        Regex::new(r"\b[0-9]{4}\b").expect("four digit pattern is valid");
    static ref WORD: Regex = Regex::new(r"\b[[:alpha:]]+\b").expect("word pattern is valid");
}

/// A bulleted line, split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bullet {
    /// Number of whitespace characters before the symbol
    pub indent: usize,
    pub symbol: char,
    /// Everything after the symbol and the whitespace following it
    pub content: String,
}

impl Bullet {
    /// The symbol plus the single space drawn before the content
    pub fn token(&self) -> String {
        format!("{} ", self.symbol)
    }
}

/// The role a line plays in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Blank or whitespace-only
    Spacer,
    /// The first non-blank line: name and contact details
    Contact,
    /// A section title, e.g. `EXPERIENCE`
    Heading,
    /// A role, degree, or project line, e.g. `Senior Engineer | Acme | 2020-2023`
    Subheading,
    Bullet(Bullet),
    Paragraph,
}

/// A physical line and its role. Never modified once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub text: String,
    pub role: Role,
}

impl ClassifiedLine {
    /// The text that gets drawn: bullet content, or the line without surrounding whitespace
    pub fn content(&self) -> &str {
        match &self.role {
            Role::Bullet(bullet) => bullet.content.trim_end(),
            _ => self.text.trim(),
        }
    }

    /// Number of leading space characters
    pub fn leading_spaces(&self) -> usize {
        self.text.chars().take_while(|&ch| ch == ' ').count()
    }
}

/// Classifies lines according to a [ClassifierConfig]
#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    config: &'a ClassifierConfig,
    ascii_bullets: bool,
}

impl<'a> Classifier<'a> {
    /// With `ascii_bullets` set, every bullet symbol other than `-` and `*` is reported as
    /// `-`, for fonts that can't draw anything else
    pub fn new(config: &'a ClassifierConfig, ascii_bullets: bool) -> Classifier<'a> {
        Classifier {
            config,
            ascii_bullets,
        }
    }

    /// Decide the role of a single line. Total: every line gets exactly one role.
    ///
    /// Precedence: blank lines are spacers, then the first non-blank line is the contact
    /// line, then bullets, headings, and subheadings in that order; anything else is a
    /// paragraph.
    pub fn classify(&self, line: &str, is_first_non_empty: bool) -> Role {
        if line.trim().is_empty() {
            return Role::Spacer;
        }
        if is_first_non_empty {
            return Role::Contact;
        }
        if let Some(bullet) = self.parse_bullet(line) {
            return Role::Bullet(bullet);
        }
        if self.is_heading(line) {
            return Role::Heading;
        }
        if self.is_subheading(line) {
            return Role::Subheading;
        }
        Role::Paragraph
    }

    /// Split `text` into physical lines and classify each of them
    pub fn classify_lines(&self, text: &str) -> Vec<ClassifiedLine> {
        let mut seen_content = false;
        text.lines()
            .map(|line| {
                let is_first_non_empty = !seen_content && !line.trim().is_empty();
                seen_content |= is_first_non_empty;
                ClassifiedLine {
                    text: line.to_string(),
                    role: self.classify(line, is_first_non_empty),
                }
            })
            .collect()
    }

    /// Split a bulleted line into indent, symbol, and content. `None` unless the line starts
    /// (after optional whitespace) with `●`, `•`, `-`, or `*` followed by whitespace.
    pub fn parse_bullet(&self, line: &str) -> Option<Bullet> {
        let captures = BULLET.captures(line)?;
        let indent = captures.get(1).map_or(0, |m| m.as_str().chars().count());
        let mut symbol = captures.get(2)?.as_str().chars().next()?;
        if self.ascii_bullets && symbol != '-' && symbol != '*' {
            symbol = '-';
        }
        let content = captures.get(3).map_or("", |m| m.as_str()).to_string();
        Some(Bullet {
            indent,
            symbol,
            content,
        })
    }

    /// A known section name, an all-caps line of heading length, or a short line ending in `:`
    pub fn is_heading(&self, line: &str) -> bool {
        let s = line.trim();
        let length = s.chars().count();

        if self.config.match_section_names {
            let name = s.trim_end_matches(':').trim_end().to_uppercase();
            if self.config.section_names.iter().any(|known| *known == name) {
                return true;
            }
        }

        (is_upper(s)
            && (self.config.heading_min_chars..=self.config.heading_max_chars).contains(&length))
            || (s.ends_with(':') && length <= self.config.colon_heading_max_chars)
    }

    /// A role, degree, or project line: not a heading or bullet, and either carries a `|`
    /// separator, a comma, a year, or a month, or is mostly capitalised words
    pub fn is_subheading(&self, line: &str) -> bool {
        let s = line.trim();
        if s.is_empty() || is_upper(s) || BULLET.is_match(s) || self.is_heading(s) {
            return false;
        }
        if s.contains(" | ") || s.contains(',') {
            return true;
        }
        if self.mentions_year(s) || self.mentions_month(s) {
            return true;
        }

        let words: Vec<&str> = s.split_whitespace().collect();
        if !(self.config.subheading_min_words..=self.config.subheading_max_words)
            .contains(&words.len())
        {
            return false;
        }
        let capitalized = words
            .iter()
            .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
            .count();
        capitalized as f32 / words.len() as f32 > self.config.capitalized_ratio
    }

    /// Whether any standalone four-digit number falls within the configured year range
    pub fn mentions_year(&self, line: &str) -> bool {
        FOUR_DIGITS
            .find_iter(line)
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .any(|year| (self.config.year_min..=self.config.year_max).contains(&year))
    }

    /// Whether any whole word is one of the configured month names
    pub fn mentions_month(&self, line: &str) -> bool {
        WORD.find_iter(line).any(|word| {
            self.config
                .month_names
                .iter()
                .any(|month| month.eq_ignore_ascii_case(word.as_str()))
        })
    }
}

/// True when the text has at least one cased character and none of them are lower-case
fn is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn roles(text: &str) -> Vec<Role> {
        let config = ClassifierConfig::default();
        Classifier::new(&config, false)
            .classify_lines(text)
            .into_iter()
            .map(|line| line.role)
            .collect()
    }

    #[test]
    fn classifies_a_short_resume() {
        assert_eq!(
            roles("Jane Doe\n\nEXPERIENCE\nSenior Engineer | Acme Corp | 2020-2023\n● Led a team of 5\n● Shipped X"),
            vec![
                Role::Contact,
                Role::Spacer,
                Role::Heading,
                Role::Subheading,
                Role::Bullet(Bullet {
                    indent: 0,
                    symbol: '●',
                    content: "Led a team of 5".to_string(),
                }),
                Role::Bullet(Bullet {
                    indent: 0,
                    symbol: '●',
                    content: "Shipped X".to_string(),
                }),
            ]
        );
    }

    #[test]
    fn contact_is_the_first_non_blank_line() {
        assert_eq!(
            roles("\n   \nEXPERIENCE\nSKILLS"),
            vec![Role::Spacer, Role::Spacer, Role::Contact, Role::Heading]
        );
    }

    #[test]
    fn headings() {
        let config = ClassifierConfig::default();
        let classifier = Classifier::new(&config, false);
        assert_eq!(classifier.classify("SKILLS", false), Role::Heading);
        assert_eq!(classifier.classify("Technical Skills:", false), Role::Heading);
        assert_eq!(classifier.classify("Work History", false), Role::Heading);
        // all-caps but too short or too long
        assert_eq!(classifier.classify("AB", false), Role::Paragraph);
        assert_ne!(classifier.classify(&"A".repeat(41), false), Role::Heading);
    }

    #[test]
    fn section_names_can_be_disabled() {
        let config = ClassifierConfig {
            match_section_names: false,
            ..ClassifierConfig::default()
        };
        let classifier = Classifier::new(&config, false);
        assert_eq!(classifier.classify("Work History", false), Role::Paragraph);
        assert_eq!(classifier.classify("WORK HISTORY", false), Role::Heading);
    }

    #[test]
    fn subheadings() {
        let config = ClassifierConfig::default();
        let classifier = Classifier::new(&config, false);
        for line in [
            "Acme Corp | Staff Engineer",
            "University of Somewhere, BSc Computer Science",
            "Platform team 2019 to present",
            "Consultant since Mar",
            "Built The Payment Platform From Scratch",
        ] {
            assert_eq!(classifier.classify(line, false), Role::Subheading, "{line}");
        }
    }

    #[test]
    fn year_range_and_month_names_are_configurable() {
        let config = ClassifierConfig {
            year_min: 2000,
            year_max: 2010,
            month_names: vec!["March".to_string()],
            ..ClassifierConfig::default()
        };
        let classifier = Classifier::new(&config, false);
        assert_eq!(classifier.classify("Platform team 2019 to present", false), Role::Paragraph);
        assert_eq!(classifier.classify("Platform team 2004 to present", false), Role::Subheading);
        assert_eq!(classifier.classify("Consultant since Mar", false), Role::Paragraph);
        assert_eq!(classifier.classify("Consultant since march", false), Role::Subheading);

        let defaults = ClassifierConfig::default();
        let classifier = Classifier::new(&defaults, false);
        assert!(classifier.mentions_year("Acme 1999-2001"));
        assert!(!classifier.mentions_year("Room 1899 and 21000"));
        assert!(classifier.mentions_month("since DEC"));
        assert!(!classifier.mentions_month("decided"));
    }

    #[test]
    fn low_capitalisation_sentences_are_paragraphs() {
        let config = ClassifierConfig::default();
        let classifier = Classifier::new(&config, false);
        assert_eq!(
            classifier.classify("Managed cross-functional teams across three continents", false),
            Role::Paragraph
        );
        // month names only count as whole words
        assert_eq!(
            classifier.classify("Decided to sequence the mayhem", false),
            Role::Paragraph
        );
    }

    #[test]
    fn bullets_keep_indent_and_symbol() {
        let config = ClassifierConfig::default();
        let classifier = Classifier::new(&config, false);
        assert_eq!(
            classifier.classify("    * Nested point", false),
            Role::Bullet(Bullet {
                indent: 4,
                symbol: '*',
                content: "Nested point".to_string(),
            })
        );
        // an all-caps bullet is still a bullet
        assert!(matches!(classifier.classify("- AWS GCP", false), Role::Bullet(_)));
        // a dash with no space after it is not a bullet
        assert_eq!(classifier.classify("-5% churn", false), Role::Paragraph);
    }

    #[test]
    fn ascii_mode_normalises_bullet_symbols() {
        let config = ClassifierConfig::default();
        let classifier = Classifier::new(&config, true);
        let Role::Bullet(bullet) = classifier.classify("• Shipped X", false) else {
            panic!("expected a bullet");
        };
        assert_eq!(bullet.symbol, '-');
        assert_eq!(bullet.token(), "- ");

        let Role::Bullet(bullet) = classifier.classify("* Shipped Y", false) else {
            panic!("expected a bullet");
        };
        assert_eq!(bullet.symbol, '*');
    }

    proptest! {
        #[test]
        fn classification_depends_only_on_the_line(line in "[A-Za-z0-9 ,:|•*-]{1,60}") {
            let config = ClassifierConfig::default();
            let classifier = Classifier::new(&config, false);
            let alone = classifier.classify(&line, false);
            prop_assert_eq!(&alone, &classifier.classify(&line, false));

            // the same line following a contact line gets the same role
            let lines = classifier.classify_lines(&format!("Jane Doe\n{line}"));
            prop_assert_eq!(&lines[1].role, &alone);
        }
    }
}
