pub mod color;
pub mod geometry;
pub mod money;

pub use color::Color;
pub use geometry::Rect;
pub use money::{format_currency, round2};
