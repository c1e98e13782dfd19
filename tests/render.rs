use pretty_assertions::assert_eq;
use proptest::prelude::*;
use resume_pdf::config::{LayoutConfig, DEFAULT_FOOTER};
use resume_pdf::{Engine, Font, FontFiles, FontSet, FontStyle};

fn builtin_engine(config: LayoutConfig) -> Engine {
    Engine::new(config, FontSet::builtin())
}

fn fixture_fonts() -> FontFiles {
    FontFiles::in_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fonts"))
}

fn embedded_engine(config: LayoutConfig) -> Engine {
    let fonts = FontSet::try_load(&fixture_fonts()).expect("fixture fonts load");
    Engine::new(config, fonts)
}

const SAMPLE: &str = "Jane Doe\n\nEXPERIENCE\nSenior Engineer | Acme Corp | 2020-2023\n\u{25CF} Led a team of 5 \u{2013} \u{201C}quoted\u{201D}\n\u{25CF} Shipped X";

/// Every page's decoded content stream, in page order
fn page_contents(bytes: &[u8]) -> Vec<String> {
    let doc = lopdf::Document::load_mem(bytes).expect("output parses");
    doc.get_pages()
        .values()
        .map(|&id| {
            let content = doc.get_page_content(id).expect("page has content");
            String::from_utf8_lossy(&content).into_owned()
        })
        .collect()
}

fn long_resume(bullets: usize) -> String {
    let mut text = String::from("Jane Doe | jane@example.com | +1 555 0100\n\nEXPERIENCE\n");
    text.push_str("Senior Engineer | Acme Corp | 2020-2023\n");
    for i in 0..bullets {
        text.push_str(&format!(
            "● Delivered feature {i}, {}\n",
            lipsum::lipsum_words(12)
        ));
    }
    text
}

#[test]
fn short_resume_renders_on_one_page() {
    let rendered = builtin_engine(LayoutConfig::default())
        .render(
            "Jane Doe\n\nEXPERIENCE\nSenior Engineer | Acme Corp | 2020-2023\n● Led a team of 5\n● Shipped X",
            "Jane Doe",
        )
        .expect("can render");

    assert_eq!(rendered.page_count, 1);
    assert!(!rendered.truncated);

    let pages = page_contents(&rendered.bytes);
    assert_eq!(pages.len(), 1);
    assert!(pages[0].contains("(Jane Doe) Tj"));
    assert!(pages[0].contains("(EXPERIENCE) Tj"));
    assert!(pages[0].contains("(Senior Engineer | Acme Corp | 2020-2023) Tj"));
    assert!(!pages[0].contains(DEFAULT_FOOTER));
}

#[test]
fn hundreds_of_bullets_are_capped_at_two_pages() {
    let rendered = builtin_engine(LayoutConfig::default())
        .render(&long_resume(300), "Jane Doe")
        .expect("can render");

    assert_eq!(rendered.page_count, 2);
    assert!(rendered.truncated);

    let pages = page_contents(&rendered.bytes);
    assert_eq!(pages.len(), 2);
    let footer = format!("({DEFAULT_FOOTER}) Tj");
    assert!(!pages[0].contains(&footer));
    assert_eq!(pages[1].matches(&footer).count(), 1);
    // the footer is the last thing drawn
    let last_show = pages[1]
        .lines()
        .filter(|line| line.ends_with("Tj"))
        .last()
        .expect("page has text");
    assert_eq!(last_show, footer);
    // and the trailing bullets never made it
    assert!(!pages.concat().contains("299,"));
}

#[test]
fn missing_fonts_fall_back_to_sanitised_helvetica() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let config = LayoutConfig::default().with_fonts(FontFiles::in_dir(dir.path()));
    let engine = Engine::from_config(config);
    assert!(engine.fonts.is_builtin());

    let rendered = engine
        .render(
            "Jane Doe\n\nSKILLS\n● Rust \u{2014} \u{201C}fast\u{201D}\n• Go",
            "Jane Doe",
        )
        .expect("can render");
    let pages = page_contents(&rendered.bytes);
    assert!(pages[0].contains("(- ) Tj"));
    assert!(pages[0].contains("(Rust - \"fast\") Tj"));
    assert!(!pages[0].contains('\u{25CF}'));

    let doc = lopdf::Document::load_mem(&rendered.bytes).expect("output parses");
    let base_fonts: Vec<Vec<u8>> = doc
        .objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .filter_map(|dict| dict.get(b"BaseFont").ok())
        .filter_map(|name| name.as_name().ok().map(<[u8]>::to_vec))
        .collect();
    assert!(base_fonts.contains(&b"Helvetica".to_vec()));
    assert!(base_fonts.contains(&b"Helvetica-Bold".to_vec()));
}

#[test]
fn title_is_written_to_the_info_dictionary() {
    let rendered = builtin_engine(LayoutConfig::default())
        .render("Jane Doe", "Jane Doe - Resume")
        .expect("can render");
    let doc = lopdf::Document::load_mem(&rendered.bytes).expect("output parses");
    let info = doc
        .trailer
        .get(b"Info")
        .and_then(|info| info.as_reference())
        .and_then(|id| doc.get_dictionary(id))
        .expect("has info dictionary");
    let title = info
        .get(b"Title")
        .and_then(|title| title.as_str())
        .expect("has title");
    assert_eq!(title, b"Jane Doe - Resume");
}

#[test]
fn embedded_fonts_render_extractable_text() {
    let engine = embedded_engine(LayoutConfig::default());
    assert!(!engine.fonts.is_builtin());

    let rendered = engine.render(SAMPLE, "Jane Doe").expect("can render");
    assert_eq!(rendered.page_count, 1);

    let doc = lopdf::Document::load_mem(&rendered.bytes).expect("output parses");
    let text = doc.extract_text(&[1]).expect("text extracts through ToUnicode");
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("EXPERIENCE"));
    assert!(text.contains("Senior Engineer | Acme Corp | 2020-2023"));
    assert!(text.contains("Led a team of 5 \u{2013} \u{201C}quoted\u{201D}"));

    // glyph ids, not literal strings
    let pages = page_contents(&rendered.bytes);
    assert!(!pages[0].contains("(Jane Doe) Tj"));
    assert!(pages[0].contains("> Tj"));

    let subtypes: Vec<Vec<u8>> = doc
        .objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .filter_map(|dict| dict.get(b"Subtype").ok())
        .filter_map(|name| name.as_name().ok().map(<[u8]>::to_vec))
        .collect();
    assert!(subtypes.contains(&b"Type0".to_vec()));
    assert!(subtypes.contains(&b"CIDFontType2".to_vec()));
}

#[test]
fn embedded_bullets_are_not_sanitised() {
    let engine = embedded_engine(LayoutConfig::default());
    let rendered = engine.render(SAMPLE, "Jane Doe").expect("can render");

    let regular = Font::load_from_path(fixture_fonts().path(FontStyle::Regular))
        .expect("can load font");
    let bullet = regular.glyph_id('\u{25CF}').expect("font draws \u{25CF}");
    let dash = regular.glyph_id('-').expect("font draws -");
    let space = regular.glyph_id(' ').expect("font draws spaces");

    let pages = page_contents(&rendered.bytes);
    assert!(pages[0].contains(&format!("<{bullet:04x}{space:04x}> Tj")));
    assert!(!pages[0].contains(&format!("<{dash:04x}{space:04x}> Tj")));

    let doc = lopdf::Document::load_mem(&rendered.bytes).expect("output parses");
    let text = doc.extract_text(&[1]).expect("text extracts");
    assert!(text.contains('\u{25CF}'));
}

#[test]
fn embedded_renders_are_byte_identical() {
    let text = long_resume(40);
    let first = embedded_engine(LayoutConfig::default())
        .render(&text, "Jane Doe")
        .expect("can render");
    // a separately loaded font set must write the same bytes
    let second = embedded_engine(LayoutConfig::default())
        .render(&text, "Jane Doe")
        .expect("can render");
    assert_eq!(first.page_count, second.page_count);
    assert!(first.bytes == second.bytes);
}

#[test]
fn configured_font_directory_is_used() {
    let engine = Engine::from_config(LayoutConfig::default().with_fonts(fixture_fonts()));
    assert!(!engine.fonts.is_builtin());
    assert!(!engine.fonts.face(FontStyle::Italic).is_builtin());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn never_exceeds_the_page_cap_and_is_deterministic(
        lines in prop::collection::vec(
            prop_oneof![
                Just(String::new()),
                Just("EXPERIENCE".to_string()),
                "[A-Z][a-z]{2,8} \\| [A-Z][a-z]{2,8} \\| 20[0-2][0-9]",
                "[-*•] [a-z]{1,10}( [a-z]{1,10}){0,25}",
                "[a-z]{1,10}( [a-z]{1,10}){0,40}",
            ],
            0..250,
        ),
        max_pages in 1usize..4,
    ) {
        let engine = builtin_engine(LayoutConfig::default().with_max_pages(max_pages));
        let text = lines.join("\n");

        let first = engine.render(&text, "Resume").expect("can render");
        prop_assert!(first.page_count >= 1);
        prop_assert!(first.page_count <= max_pages);

        let parsed = lopdf::Document::load_mem(&first.bytes).expect("output parses");
        prop_assert_eq!(parsed.get_pages().len(), first.page_count);

        let second = engine.render(&text, "Resume").expect("can render");
        prop_assert_eq!(first, second);
    }
}
