use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub fn is_bold(&self) -> bool {
        matches!(self, FontWeight::Bold)
    }
}

/// A concrete font selection for measuring and drawing a run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
        }
    }

    pub fn regular(family: impl Into<String>, size: f32) -> Self {
        Self::new(family, size, FontWeight::Regular)
    }

    pub fn bold(family: impl Into<String>, size: f32) -> Self {
        Self::new(family, size, FontWeight::Bold)
    }

    /// Baseline-to-baseline distance for stacked lines of this font.
    pub fn line_height(&self) -> f32 {
        self.size * 1.2
    }
}
