//! Walks laid-out pages in draw order and emits lopdf content streams.
//!
//! Text is set in the base-14 Type1 faces with WinAnsi encoding, so no
//! font files are embedded and output depends only on the input pages.

use crate::RenderError;
use billow_layout::{LayoutElement, Page, PositionedElement, RectElement, RuleElement, TextElement};
use billow_style::{FontSpec, PageLayout};
use billow_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::io::Cursor;

/// Base-14 faces this renderer can reference: (internal name, BaseFont).
const BASE_FONTS: [(&str, &str); 6] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Times-Roman"),
    ("F4", "Times-Bold"),
    ("F5", "Courier"),
    ("F6", "Courier-Bold"),
];

static DEFAULT_FONT_NAME: Lazy<String> = Lazy::new(|| "F1".to_string());

pub struct PdfRenderer {
    font_map: HashMap<String, String>,
}

impl PdfRenderer {
    pub fn new() -> Self {
        let mut font_map = HashMap::new();
        for (internal, base_font) in BASE_FONTS {
            font_map.insert(base_font.to_string(), internal.to_string());
        }
        Self { font_map }
    }

    /// Assemble a complete PDF from the laid-out pages.
    pub fn render(&self, pages: &[Page], page_layout: &PageLayout) -> Result<Vec<u8>, RenderError> {
        let (page_width, page_height) = page_layout.size.dimensions_pt();

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (internal, base_font) in BASE_FONTS {
            let face_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font,
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(internal, Object::Reference(face_id));
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        let mut page_ids = Vec::with_capacity(pages.len());
        for page in pages {
            log::debug!(
                "rendering page {} ({} elements)",
                page.number + 1,
                page.elements.len()
            );
            let content = render_page_content(page, page_height, &self.font_map);
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let page_count = page_ids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut Cursor::new(&mut bytes))?;
        Ok(bytes)
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_page_content(
    page: &Page,
    page_height: f32,
    font_map: &HashMap<String, String>,
) -> Content {
    let mut ctx = PageContext::new(page_height, font_map);
    for element in &page.elements {
        ctx.draw_element(element);
    }
    ctx.finish()
}

// --- Internal page drawing context ---

struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: RenderState,
    font_map: &'a HashMap<String, String>,
}

#[derive(Default, Clone, PartialEq)]
struct RenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
}

impl<'a> PageContext<'a> {
    fn new(page_height: f32, font_map: &'a HashMap<String, String>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: RenderState::default(),
            font_map,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rect(rect) => self.draw_rect(rect, el),
            LayoutElement::Rule(rule) => self.draw_rule(rule, el),
        }
    }

    fn set_font(&mut self, font: &FontSpec) {
        let internal = self
            .font_map
            .get(base_font_name(font))
            .unwrap_or(&DEFAULT_FONT_NAME);
        if self.state.font_name != *internal || self.state.font_size != font.size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(internal.as_bytes().to_vec()), font.size.into()],
            ));
            self.state.font_name = internal.clone();
            self.state.font_size = font.size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.content.operations.push(Operation::new(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            ));
            self.state.fill_color = Some(color);
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        self.content.operations.push(Operation::new("BT", vec![]));
        self.set_font(&text.font);
        self.set_fill_color(text.color);
        let baseline_y = el.y + text.font.size * 0.8;
        let pdf_y = self.page_height - baseline_y;
        self.content
            .operations
            .push(Operation::new("Td", vec![el.x.into(), pdf_y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                to_win_ansi(&text.content),
                StringFormat::Literal,
            )],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let pdf_y = self.page_height - (el.y + el.height);
        self.set_fill_color(rect.fill);
        self.content.operations.push(Operation::new(
            "re",
            vec![
                el.x.into(),
                pdf_y.into(),
                el.width.into(),
                el.height.into(),
            ],
        ));
        self.content.operations.push(Operation::new("f", vec![]));
    }

    fn draw_rule(&mut self, rule: &RuleElement, el: &PositionedElement) {
        // Stroke along the vertical center of the element's box.
        let pdf_y = self.page_height - el.y - rule.thickness / 2.0;
        self.content
            .operations
            .push(Operation::new("w", vec![rule.thickness.into()]));
        self.content.operations.push(Operation::new(
            "RG",
            vec![
                (rule.color.r as f32 / 255.0).into(),
                (rule.color.g as f32 / 255.0).into(),
                (rule.color.b as f32 / 255.0).into(),
            ],
        ));
        self.content
            .operations
            .push(Operation::new("m", vec![el.x.into(), pdf_y.into()]));
        self.content
            .operations
            .push(Operation::new("l", vec![(el.x + el.width).into(), pdf_y.into()]));
        self.content.operations.push(Operation::new("S", vec![]));
    }
}

/// Map a font spec onto the nearest base-14 face. Unknown families fall
/// back to Helvetica.
fn base_font_name(font: &FontSpec) -> &'static str {
    let family = font.family.to_ascii_lowercase();
    let bold = font.weight.is_bold();
    if family.contains("times") {
        if bold { "Times-Bold" } else { "Times-Roman" }
    } else if family.contains("courier") {
        if bold { "Courier-Bold" } else { "Courier" }
    } else if bold {
        "Helvetica-Bold"
    } else {
        "Helvetica"
    }
}

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}
