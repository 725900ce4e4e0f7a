//! Deterministic text layout: fixed A4 page box, fixed margins and line
//! height, greedy word wrap, page break when the cumulative line height
//! exceeds the printable height. Identical input always yields identical
//! page-break points.

use super::Surface;

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 50.0;
pub const LINE_HEIGHT: f32 = 16.0;
pub const BODY_SIZE: f32 = 11.0;

/// Average glyph advance as a fraction of the font size (Helvetica-ish).
/// An estimate is enough: wrapping only has to be stable, not typographically
/// exact.
const GLYPH_WIDTH_FACTOR: f32 = 0.5;

pub fn printable_width() -> f32 {
    PAGE_WIDTH - 2.0 * MARGIN
}

pub fn lines_per_page() -> usize {
    ((PAGE_HEIGHT - 2.0 * MARGIN) / LINE_HEIGHT) as usize
}

fn max_chars(width: f32, font_size: f32) -> usize {
    let per_char = font_size * GLYPH_WIDTH_FACTOR;
    ((width / per_char) as usize).max(1)
}

/// Greedy word wrap of a single paragraph (no embedded newlines).
fn wrap_paragraph(text: &str, limit: usize, out: &mut Vec<String>) {
    if text.trim().is_empty() {
        out.push(String::new());
        return;
    }
    let mut line = String::new();
    for word in text.split_whitespace() {
        // Hard-split words longer than a full line.
        if word.chars().count() > limit {
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(limit) {
                out.push(chunk.iter().collect());
            }
            continue;
        }
        let candidate_len = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if candidate_len > limit && !line.is_empty() {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(line);
    }
}

/// Split `text` into lines no wider than `width` at `font_size`. Embedded
/// newlines are preserved as line breaks.
pub fn wrap(text: &str, width: f32, font_size: f32) -> Vec<String> {
    let limit = max_chars(width, font_size);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, limit, &mut out);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Break composed pages into artifact pages. Each composed page starts a
/// fresh artifact page; within one, wrapped lines flow and break onto a new
/// page once the printable height is exhausted.
pub fn paginate(pages: &[String]) -> Vec<Vec<String>> {
    let capacity = lines_per_page();
    let mut out: Vec<Vec<String>> = Vec::new();
    for page_text in pages {
        let lines = wrap(page_text, printable_width(), BODY_SIZE);
        let mut current: Vec<String> = Vec::new();
        for line in lines {
            if current.len() >= capacity {
                out.push(std::mem::take(&mut current));
            }
            current.push(line);
        }
        out.push(current);
    }
    if out.is_empty() {
        out.push(vec![]);
    }
    out
}

/// Draw composed pages onto a surface using the fixed metrics above.
pub fn render<S: Surface>(surface: &mut S, pages: &[String]) {
    surface.set_font(super::FontStyle::Regular);
    surface.set_font_size(BODY_SIZE);
    for (i, page_lines) in paginate(pages).iter().enumerate() {
        if i > 0 {
            surface.add_page();
        }
        for (row, line) in page_lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = PAGE_HEIGHT - MARGIN - LINE_HEIGHT * (row as f32 + 1.0);
            surface.text(line, MARGIN, y);
        }
    }
}
