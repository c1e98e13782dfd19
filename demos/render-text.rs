//! Render a plain-text resume to a PDF:
//!
//! ```sh
//! RUST_LOG=resume_pdf=debug cargo run --example render-text -- resume.txt resume.pdf
//! ```
//!
//! Without arguments, renders a generated resume to `render-text.pdf`.

use resume_pdf::config::LayoutConfig;
use resume_pdf::Engine;
use tracing_subscriber::EnvFilter;

fn sample() -> String {
    let mut text = String::from("Jane Doe | jane@example.com | +1 555 0100\n\nSUMMARY\n");
    text.push_str(&lipsum::lipsum(60));
    text.push_str("\n\nEXPERIENCE\n");
    for (role, years) in [
        ("Staff Engineer | Acme Corp", "2020-2024"),
        ("Senior Engineer | Beta Ltd", "2016-2020"),
        ("Engineer | Gamma Inc", "2012-2016"),
    ] {
        text.push_str(&format!("{role} | {years}\n"));
        for _ in 0..8 {
            text.push_str(&format!("● {}\n", lipsum::lipsum_words(18)));
        }
        text.push('\n');
    }
    text.push_str("EDUCATION\nUniversity of Somewhere, BSc Computer Science\n");
    text
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let text = match args.next() {
        Some(path) => std::fs::read_to_string(path).expect("can read input text"),
        None => sample(),
    };
    let out = args.next().unwrap_or_else(|| "render-text.pdf".to_string());

    let engine = Engine::from_config(LayoutConfig::default());
    let rendered = engine.render(&text, "Resume").expect("can render");
    std::fs::write(&out, &rendered.bytes).expect("can write output");

    tracing::info!(
        out = %out,
        pages = rendered.page_count,
        truncated = rendered.truncated,
        "done"
    );
}
