//! Artifact generation.
//!
//! The composer and the template catalog only ever talk to the [`Surface`]
//! capability set; the lopdf-backed implementation lives in [`surface`] and
//! the deterministic text layout in [`layout`].

pub mod layout;
pub mod surface;

pub use surface::{PdfSurface, TextCapture};

/// Font faces available to placements and the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// The drawing capability set the composer depends on. Matches what a
/// minimal PDF writer exposes: font selection, positioned text, page
/// breaks, and width-based line splitting.
pub trait Surface {
    fn set_font(&mut self, style: FontStyle);
    fn set_font_size(&mut self, size: f32);
    fn text(&mut self, s: &str, x: f32, y: f32);
    fn add_page(&mut self);
    fn font_size(&self) -> f32;

    /// Split `s` into lines no wider than `width` at the current font size.
    fn split_to_width(&self, s: &str, width: f32) -> Vec<String> {
        layout::wrap(s, width, self.font_size())
    }
}
