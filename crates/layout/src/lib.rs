use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Usable page area is {width:.1} x {height:.1}pt; margins leave no room for content.")]
    InvalidGeometry { width: f32, height: f32 },
}

pub mod config;
pub mod elements;
pub mod engine;
pub mod metrics;
pub mod text;

pub use config::LayoutConfig;
pub use elements::{
    LayoutElement, Page, PositionedElement, RectElement, RuleElement, TextElement,
};
pub use engine::LayoutEngine;
pub use metrics::{ApproxMetrics, FontMetrics};
pub use text::{clip_to_width, wrap_text};

#[cfg(test)]
mod engine_test;
