use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::errors::AppError;

use super::{FontStyle, Surface};

/// Surface that accumulates drawing operations and serializes them into a
/// PDF with `lopdf`. One content stream per page; Helvetica only.
pub struct PdfSurface {
    pages: Vec<Vec<Operation>>,
    style: FontStyle,
    size: f32,
}

impl PdfSurface {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            style: FontStyle::Regular,
            size: super::layout::BODY_SIZE,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn font_name(&self) -> &'static str {
        match self.style {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
        }
    }

    /// Serialize the accumulated pages into PDF bytes.
    pub fn into_bytes(self) -> Result<Vec<u8>, AppError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|e| AppError::Artifact(format!("content encode failed: {e}")))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    super::layout::PAGE_WIDTH.into(),
                    super::layout::PAGE_HEIGHT.into(),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut buf = Vec::new();
        doc.save_to(&mut buf)
            .map_err(|e| AppError::Artifact(format!("pdf serialization failed: {e}")))?;
        Ok(buf)
    }
}

impl Default for PdfSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for PdfSurface {
    fn set_font(&mut self, style: FontStyle) {
        self.style = style;
    }

    fn set_font_size(&mut self, size: f32) {
        self.size = size;
    }

    fn text(&mut self, s: &str, x: f32, y: f32) {
        let font_name = self.font_name();
        let size = self.size;
        let ops = self
            .pages
            .last_mut()
            .expect("surface always has a current page");
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![font_name.into(), size.into()],
        ));
        ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        ops.push(Operation::new("Tj", vec![Object::string_literal(s)]));
        ops.push(Operation::new("ET", vec![]));
    }

    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn font_size(&self) -> f32 {
        self.size
    }
}

/// Surface that records every placed string in call order. Used for seed
/// text extraction from catalog templates and for asserting on rendered
/// artifact text in tests; it reproduces no layout.
#[derive(Debug, Default)]
pub struct TextCapture {
    fragments: Vec<String>,
    pages: usize,
    size: f32,
}

impl TextCapture {
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
            pages: 1,
            size: super::layout::BODY_SIZE,
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Every placed string, call order, newline-separated.
    pub fn joined(&self) -> String {
        self.fragments.join("\n")
    }
}

impl Surface for TextCapture {
    fn set_font(&mut self, _style: FontStyle) {}

    fn set_font_size(&mut self, size: f32) {
        self.size = size;
    }

    fn text(&mut self, s: &str, _x: f32, _y: f32) {
        self.fragments.push(s.to_string());
    }

    fn add_page(&mut self) {
        self.pages += 1;
    }

    fn font_size(&self) -> f32 {
        self.size
    }
}
