pub mod font;
pub mod page;
pub mod theme;

pub use font::{FontSpec, FontWeight};
pub use page::{Margins, PageLayout, PageSize};
pub use theme::{ResolvedTheme, Theme, ThemeColors, ThemeFonts};
