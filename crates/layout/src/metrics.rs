//! Text measurement abstraction.
//!
//! Width measurement is a capability of the rendering backend (font
//! metrics), injected into the layout engine so the engine itself stays
//! deterministic and backend-agnostic.

use billow_style::FontSpec;

pub trait FontMetrics {
    /// Advance width of `text` in points when set in `font`.
    fn measure(&self, text: &str, font: &FontSpec) -> f32;
}

/// Flat per-glyph advance approximation for the base-14 faces.
///
/// Every glyph advances `em_fraction` of the font size. Coarse, but
/// monotonic in string length, which is all greedy wrapping needs.
#[derive(Debug, Clone, Copy)]
pub struct ApproxMetrics {
    pub em_fraction: f32,
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self { em_fraction: 0.6 }
    }
}

impl FontMetrics for ApproxMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size * self.em_fraction
    }
}
