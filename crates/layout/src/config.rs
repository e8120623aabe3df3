use billow_style::PageLayout;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub page: PageLayout,

    /// Applied to the invoice subtotal when computing the tax line.
    ///
    /// Defaults to `0.08`.
    pub tax_rate: f64,

    pub title_size: f32,
    pub label_size: f32,
    pub body_size: f32,

    /// Height of the item-table header row, re-emitted on every page the
    /// table spans.
    pub table_header_height: f32,

    /// Padding inside table cells, applied on all four sides.
    pub cell_padding: f32,

    /// Vertical gap between document regions.
    pub section_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: PageLayout::default(),
            tax_rate: 0.08,
            title_size: 26.0,
            label_size: 11.0,
            body_size: 10.0,
            table_header_height: 24.0,
            cell_padding: 6.0,
            section_gap: 18.0,
        }
    }
}
