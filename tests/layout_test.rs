//! Text layout tests — wrapping, pagination determinism, and PDF artifact
//! serialization.

use wakili::pdf::{PdfSurface, Surface, TextCapture, layout};

#[test]
fn test_wrap_respects_the_width_limit() {
    let text = "The quick brown fox jumps over the lazy dog ".repeat(20);
    let lines = layout::wrap(&text, layout::printable_width(), layout::BODY_SIZE);

    assert!(lines.len() > 1);
    let limit = (layout::printable_width() / (layout::BODY_SIZE * 0.5)) as usize;
    for line in &lines {
        assert!(
            line.chars().count() <= limit,
            "line exceeds limit: {line:?}"
        );
    }
}

#[test]
fn test_wrap_preserves_blank_lines_and_hard_splits_long_words() {
    let lines = layout::wrap("first\n\nsecond", layout::printable_width(), layout::BODY_SIZE);
    assert_eq!(lines, vec!["first".to_string(), String::new(), "second".to_string()]);

    let long_word = "x".repeat(500);
    let lines = layout::wrap(&long_word, layout::printable_width(), layout::BODY_SIZE);
    assert!(lines.len() > 1);
    assert_eq!(lines.concat(), long_word);
}

#[test]
fn test_pagination_is_deterministic() {
    let pages = vec![
        "A statement of claim. ".repeat(400),
        "Second composed page.".to_string(),
    ];
    let first = layout::paginate(&pages);
    let second = layout::paginate(&pages);
    assert_eq!(first, second, "identical input must break identically");
}

#[test]
fn test_overflow_breaks_at_the_printable_height() {
    let many_lines = vec!["line"; layout::lines_per_page() + 10].join("\n");
    let out = layout::paginate(&[many_lines]);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].len(), layout::lines_per_page());
    assert_eq!(out[1].len(), 10);
}

#[test]
fn test_each_composed_page_starts_a_fresh_artifact_page() {
    let out = layout::paginate(&["one".to_string(), "two".to_string()]);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], vec!["one".to_string()]);
    assert_eq!(out[1], vec!["two".to_string()]);

    let mut capture = TextCapture::new();
    layout::render(
        &mut capture,
        &["one".to_string(), "two".to_string()],
    );
    assert_eq!(capture.page_count(), 2);
}

#[test]
fn test_pdf_surface_serializes_to_a_pdf() {
    let mut surface = PdfSurface::new();
    layout::render(
        &mut surface,
        &["A short affidavit body.".to_string(), "Second page.".to_string()],
    );
    assert_eq!(surface.page_count(), 2);

    let bytes = surface.into_bytes().expect("serialize");
    assert!(bytes.starts_with(b"%PDF-"), "artifact must be a PDF");
    assert!(bytes.len() > 200);
}

#[test]
fn test_split_to_width_uses_the_current_font_size() {
    let mut surface = PdfSurface::new();
    surface.set_font_size(22.0);
    let big = surface.split_to_width(&"word ".repeat(40), layout::printable_width());

    surface.set_font_size(11.0);
    let small = surface.split_to_width(&"word ".repeat(40), layout::printable_width());

    assert!(
        big.len() > small.len(),
        "larger glyphs must wrap onto more lines"
    );
}
