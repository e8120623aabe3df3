use billow_style::FontSpec;
use billow_types::Color;

/// One output page of positioned elements, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub elements: Vec<PositionedElement>,
}

impl Page {
    pub fn new(number: usize) -> Self {
        Page {
            number,
            elements: Vec::new(),
        }
    }
}

/// Coordinates use a top-left origin in points; the renderer flips into
/// PDF space.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rect(RectElement),
    Rule(RuleElement),
}

/// A single positioned run of text; wrapping happens before elements are
/// emitted, so content never contains newlines.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: FontSpec,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub fill: Color,
}

/// A horizontal rule line drawn across the element's width.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleElement {
    pub color: Color,
    pub thickness: f32,
}
