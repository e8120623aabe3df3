//! Brand theme resolution.
//!
//! An applied theme may specify any subset of its fields; resolution falls
//! back field-by-field (never theme-by-theme) to the built-in palette, so a
//! theme carrying only `colors.primary` keeps the default fonts and the
//! other two colors.

use billow_types::Color;
use serde::{Deserialize, Serialize};

/// Default render palette, used wherever the applied theme is silent.
pub const DEFAULT_PRIMARY: Color = Color { r: 0x25, g: 0x63, b: 0xeb };
pub const DEFAULT_SECONDARY: Color = Color { r: 0x1f, g: 0x29, b: 0x37 };
pub const DEFAULT_ACCENT: Color = Color { r: 0xf5, g: 0x9e, b: 0x0b };
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Theme {
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub accent: Option<Color>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeFonts {
    pub heading: Option<String>,
    pub body: Option<String>,
}

/// A theme with every field defaulted, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub heading_font: String,
    pub body_font: String,
}

impl ResolvedTheme {
    /// Total function: any subset of theme fields resolves to a complete
    /// palette.
    pub fn resolve(applied: Option<&Theme>) -> ResolvedTheme {
        let colors = applied.map(|t| &t.colors);
        let fonts = applied.map(|t| &t.fonts);
        ResolvedTheme {
            primary: colors.and_then(|c| c.primary).unwrap_or(DEFAULT_PRIMARY),
            secondary: colors.and_then(|c| c.secondary).unwrap_or(DEFAULT_SECONDARY),
            accent: colors.and_then(|c| c.accent).unwrap_or(DEFAULT_ACCENT),
            heading_font: fonts
                .and_then(|f| f.heading.clone())
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            body_font: fonts
                .and_then(|f| f.body.clone())
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        }
    }
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        ResolvedTheme::resolve(None)
    }
}
