//! The page layout engine.
//!
//! Walks the invoice document region by region (title, metadata, parties,
//! item table, totals, notes), maintaining a running vertical cursor and
//! opening a new page whenever the next region or table row would cross
//! the bottom margin. Rows and wrapped lines are atomic: anything that
//! does not fit moves to the next page whole, and the item-table header
//! row is re-emitted on every page the table spans.

use crate::config::LayoutConfig;
use crate::elements::{
    LayoutElement, Page, PositionedElement, RectElement, RuleElement, TextElement,
};
use crate::metrics::FontMetrics;
use crate::text::{clip_to_width, wrap_text};
use crate::LayoutError;
use billow_doc::{InvoiceDocument, LineItem, PartyInfo, Totals};
use billow_style::{FontSpec, ResolvedTheme};
use billow_types::{format_currency, Color, Rect};

// Small epsilon to absorb floating point inaccuracies in break checks.
const EPSILON: f32 = 0.01;

/// Width of the metadata label column.
const META_LABEL_WIDTH: f32 = 72.0;

/// Item-table column fractions: description, quantity, rate, amount.
const COLUMN_FRACTIONS: [f32; 4] = [0.46, 0.14, 0.20, 0.20];

/// Gutter between the issuer and bill-to columns.
const PARTY_GUTTER: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegionKind {
    Title,
    Metadata,
    Parties,
    ItemTable,
    Totals,
    Notes,
}

/// Engine-internal positioned block, recorded per page segment while a
/// document is laid out and discarded with the engine.
#[derive(Debug, Clone, Copy)]
struct Region {
    kind: RegionKind,
    bounds: Rect,
    page_index: usize,
}

pub struct LayoutEngine<'a> {
    config: &'a LayoutConfig,
    theme: &'a ResolvedTheme,
    metrics: &'a dyn FontMetrics,
    pages: Vec<Page>,
    cursor_y: f32,
    regions: Vec<Region>,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(
        config: &'a LayoutConfig,
        theme: &'a ResolvedTheme,
        metrics: &'a dyn FontMetrics,
    ) -> Result<Self, LayoutError> {
        let width = config.page.content_width();
        let height = config.page.height() - config.page.margins.top - config.page.margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::InvalidGeometry { width, height });
        }
        Ok(Self {
            config,
            theme,
            metrics,
            pages: vec![Page::new(0)],
            cursor_y: config.page.margins.top,
            regions: Vec::new(),
        })
    }

    /// Lay out the whole document into pages of positioned elements.
    pub fn layout_document(mut self, doc: &InvoiceDocument) -> Vec<Page> {
        let totals = billow_doc::totals::compute(&doc.items, self.config.tax_rate);
        self.layout_title();
        self.layout_metadata(doc);
        self.layout_parties(doc);
        self.layout_item_table(&doc.items);
        self.layout_totals(&totals);
        self.layout_notes(&doc.notes);
        self.finish()
    }

    // --- Geometry ---

    fn left(&self) -> f32 {
        self.config.page.margins.left
    }

    fn right(&self) -> f32 {
        self.config.page.width() - self.config.page.margins.right
    }

    fn content_width(&self) -> f32 {
        self.config.page.content_width()
    }

    fn usable_bottom(&self) -> f32 {
        self.config.page.height() - self.config.page.margins.bottom
    }

    fn content_height(&self) -> f32 {
        self.usable_bottom() - self.config.page.margins.top
    }

    fn page_index(&self) -> usize {
        self.pages.len().saturating_sub(1)
    }

    // --- Fonts ---

    fn body_font(&self) -> FontSpec {
        FontSpec::regular(self.theme.body_font.as_str(), self.config.body_size)
    }

    fn body_bold(&self) -> FontSpec {
        FontSpec::bold(self.theme.body_font.as_str(), self.config.body_size)
    }

    fn label_font(&self) -> FontSpec {
        FontSpec::bold(self.theme.body_font.as_str(), self.config.label_size)
    }

    // --- Pagination ---

    fn needs_page_break(&self, required: f32) -> bool {
        self.cursor_y + required > self.usable_bottom() + EPSILON
    }

    fn at_page_top(&self) -> bool {
        (self.cursor_y - self.config.page.margins.top).abs() < 0.1
    }

    /// Open a new page unless `required` fits below the cursor. A region
    /// taller than a whole page stays on a fresh page and is clipped by
    /// the caller.
    fn ensure_room(&mut self, required: f32) {
        if self.needs_page_break(required) && !self.at_page_top() {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        let number = self.pages.len();
        log::debug!("page {} full, opening page {}", number, number + 1);
        self.pages.push(Page::new(number));
        self.cursor_y = self.config.page.margins.top;
    }

    // --- Element emission ---

    fn push(&mut self, element: PositionedElement) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    fn push_text(&mut self, content: &str, x: f32, y: f32, font: &FontSpec, color: Color) {
        if content.is_empty() {
            return;
        }
        let width = self.metrics.measure(content, font);
        self.push(PositionedElement {
            x,
            y,
            width,
            height: font.line_height(),
            element: LayoutElement::Text(TextElement {
                content: content.to_string(),
                font: font.clone(),
                color,
            }),
        });
    }

    fn push_text_right(&mut self, content: &str, right_x: f32, y: f32, font: &FontSpec, color: Color) {
        let width = self.metrics.measure(content, font);
        self.push_text(content, right_x - width, y, font, color);
    }

    /// Wrap and, where a single token is wider than the column, clip with
    /// a visible marker instead of aborting the export.
    fn wrapped_lines(&self, text: &str, max_width: f32, font: &FontSpec) -> Vec<String> {
        wrap_text(text, max_width, font, self.metrics)
            .into_iter()
            .map(|line| {
                if self.metrics.measure(&line, font) > max_width + EPSILON {
                    log::warn!(
                        "unbreakable token wider than {:.1}pt column, clipping",
                        max_width
                    );
                    clip_to_width(&line, max_width, font, self.metrics)
                } else {
                    line
                }
            })
            .collect()
    }

    fn record_region(&mut self, kind: RegionKind, top: f32) {
        let bounds = Rect::new(self.left(), top, self.content_width(), self.cursor_y - top);
        self.regions.push(Region {
            kind,
            bounds,
            page_index: self.page_index(),
        });
        if let Some(region) = self.regions.last() {
            log::debug!(
                "{:?} region: page {}, {:.1}pt tall",
                region.kind,
                region.page_index + 1,
                region.bounds.height
            );
        }
    }

    // --- Regions, in document order ---

    fn layout_title(&mut self) {
        const RULE_GAP: f32 = 8.0;
        const RULE_THICKNESS: f32 = 2.0;
        let font = FontSpec::bold(self.theme.heading_font.as_str(), self.config.title_size);
        self.ensure_room(font.line_height() + RULE_GAP + RULE_THICKNESS);

        let top = self.cursor_y;
        self.push_text("INVOICE", self.left(), self.cursor_y, &font, self.theme.primary);
        self.cursor_y += font.line_height() + RULE_GAP;
        self.push(PositionedElement {
            x: self.left(),
            y: self.cursor_y,
            width: self.content_width(),
            height: RULE_THICKNESS,
            element: LayoutElement::Rule(RuleElement {
                color: self.theme.accent,
                thickness: RULE_THICKNESS,
            }),
        });
        self.cursor_y += RULE_THICKNESS;
        self.record_region(RegionKind::Title, top);
        self.cursor_y += self.config.section_gap;
    }

    fn layout_metadata(&mut self, doc: &InvoiceDocument) {
        let label_font = self.body_bold();
        let value_font = self.body_font();
        let rows = [
            ("Invoice #", doc.invoice_number.as_str()),
            ("Date", doc.invoice_date.as_str()),
            ("Due Date", doc.due_date.as_str()),
        ];
        self.ensure_room(rows.len() as f32 * value_font.line_height());

        let top = self.cursor_y;
        for (label, value) in rows {
            self.push_text(label, self.left(), self.cursor_y, &label_font, self.theme.secondary);
            self.push_text(
                value,
                self.left() + META_LABEL_WIDTH,
                self.cursor_y,
                &value_font,
                self.theme.secondary,
            );
            self.cursor_y += value_font.line_height();
        }
        self.record_region(RegionKind::Metadata, top);
        self.cursor_y += self.config.section_gap;
    }

    fn party_lines(&self, party: &PartyInfo, width: f32, font: &FontSpec) -> Vec<String> {
        let mut fields: Vec<&str> = vec![party.name.as_str()];
        if let Some(company) = &party.company {
            fields.push(company);
        }
        if let Some(email) = &party.email {
            fields.push(email);
        }
        if let Some(phone) = &party.phone {
            fields.push(phone);
        }
        if let Some(address) = &party.address {
            fields.extend(address.lines());
        }

        let mut lines = Vec::new();
        for field in fields {
            if field.trim().is_empty() {
                continue;
            }
            lines.extend(self.wrapped_lines(field, width, font));
        }
        lines
    }

    fn layout_parties(&mut self, doc: &InvoiceDocument) {
        let label_font = self.label_font();
        let body_font = self.body_font();
        let column_width = (self.content_width() - PARTY_GUTTER) / 2.0;

        let issuer = PartyInfo {
            name: doc.issuer_name.clone(),
            email: doc.issuer_email.clone(),
            ..PartyInfo::default()
        };
        let mut issuer_lines = self.party_lines(&issuer, column_width, &body_font);
        let mut bill_to_lines = self.party_lines(&doc.bill_to, column_width, &body_font);

        // Cap both columns at one page of lines; a pathological address is
        // clipped with a marker instead of overflowing the page.
        let capacity = ((self.content_height() - label_font.line_height())
            / body_font.line_height())
        .floor() as usize;
        for lines in [&mut issuer_lines, &mut bill_to_lines] {
            if lines.len() > capacity {
                log::warn!("party block of {} lines exceeds one page, clipping", lines.len());
                lines.truncate(capacity.saturating_sub(1));
                lines.push("...".to_string());
            }
        }

        let line_count = issuer_lines.len().max(bill_to_lines.len());
        let height = label_font.line_height() + line_count as f32 * body_font.line_height();
        self.ensure_room(height);

        let top = self.cursor_y;
        let left_x = self.left();
        let right_x = self.left() + column_width + PARTY_GUTTER;

        self.push_text("FROM", left_x, top, &label_font, self.theme.secondary);
        self.push_text("BILL TO", right_x, top, &label_font, self.theme.secondary);

        let mut y = top + label_font.line_height();
        for line in &issuer_lines {
            self.push_text(line, left_x, y, &body_font, self.theme.secondary);
            y += body_font.line_height();
        }
        let mut y = top + label_font.line_height();
        for line in &bill_to_lines {
            self.push_text(line, right_x, y, &body_font, self.theme.secondary);
            y += body_font.line_height();
        }

        self.cursor_y = top + height;
        self.record_region(RegionKind::Parties, top);
        self.cursor_y += self.config.section_gap;
    }

    fn column_edges(&self) -> [f32; 5] {
        let mut edges = [self.left(); 5];
        for (i, fraction) in COLUMN_FRACTIONS.iter().enumerate() {
            edges[i + 1] = edges[i] + fraction * self.content_width();
        }
        edges
    }

    fn emit_table_header(&mut self) {
        let height = self.config.table_header_height;
        let font = self.body_bold();
        let edges = self.column_edges();
        let pad = self.config.cell_padding;

        self.push(PositionedElement {
            x: self.left(),
            y: self.cursor_y,
            width: self.content_width(),
            height,
            element: LayoutElement::Rect(RectElement {
                fill: self.theme.primary,
            }),
        });
        let text_y = self.cursor_y + (height - font.line_height()) / 2.0;
        self.push_text("Description", edges[0] + pad, text_y, &font, Color::WHITE);
        self.push_text_right("Quantity", edges[2] - pad, text_y, &font, Color::WHITE);
        self.push_text_right("Rate", edges[3] - pad, text_y, &font, Color::WHITE);
        self.push_text_right("Amount", edges[4] - pad, text_y, &font, Color::WHITE);
        self.cursor_y += height;
    }

    fn row_height(&self, item: &LineItem, desc_width: f32, font: &FontSpec) -> f32 {
        let lines = self.wrapped_lines(&item.description, desc_width, font).len().max(1);
        lines as f32 * font.line_height() + 2.0 * self.config.cell_padding
    }

    fn layout_item_table(&mut self, items: &[LineItem]) {
        let font = self.body_font();
        let edges = self.column_edges();
        let pad = self.config.cell_padding;
        let desc_width = (edges[1] - edges[0]) - 2.0 * pad;
        let line_height = font.line_height();

        // Keep the header attached to the first row.
        let first_row = items
            .first()
            .map(|item| self.row_height(item, desc_width, &font))
            .unwrap_or(line_height + 2.0 * pad);
        self.ensure_room(self.config.table_header_height + first_row);

        let mut segment_top = self.cursor_y;
        self.emit_table_header();

        let max_desc_lines = (((self.content_height()
            - self.config.table_header_height
            - 2.0 * pad)
            / line_height)
            .floor() as usize)
            .max(1);

        for (index, item) in items.iter().enumerate() {
            let mut desc_lines = self.wrapped_lines(&item.description, desc_width, &font);
            if desc_lines.len() > max_desc_lines {
                log::warn!(
                    "row description of {} lines exceeds one page, clipping",
                    desc_lines.len()
                );
                desc_lines.truncate(max_desc_lines.saturating_sub(1));
                desc_lines.push("...".to_string());
            }
            let height = desc_lines.len().max(1) as f32 * line_height + 2.0 * pad;

            // A row never splits: move it whole to the next page and
            // repeat the header there.
            if self.needs_page_break(height) {
                self.record_region(RegionKind::ItemTable, segment_top);
                self.new_page();
                segment_top = self.cursor_y;
                self.emit_table_header();
            }

            if index % 2 == 1 {
                self.push(PositionedElement {
                    x: self.left(),
                    y: self.cursor_y,
                    width: self.content_width(),
                    height,
                    element: LayoutElement::Rect(RectElement {
                        fill: self.theme.secondary.tint(0.92),
                    }),
                });
            }

            let text_y = self.cursor_y + pad;
            let mut y = text_y;
            for line in &desc_lines {
                self.push_text(line, edges[0] + pad, y, &font, self.theme.secondary);
                y += line_height;
            }
            self.push_text_right(
                &format_quantity(item.quantity),
                edges[2] - pad,
                text_y,
                &font,
                self.theme.secondary,
            );
            self.push_text_right(
                &format_currency(item.rate),
                edges[3] - pad,
                text_y,
                &font,
                self.theme.secondary,
            );
            self.push_text_right(
                &format_currency(item.amount()),
                edges[4] - pad,
                text_y,
                &font,
                self.theme.secondary,
            );

            self.cursor_y += height;
        }

        self.record_region(RegionKind::ItemTable, segment_top);
        self.cursor_y += self.config.section_gap;
    }

    fn layout_totals(&mut self, totals: &Totals) {
        const RULE_GAP: f32 = 5.0;
        const RULE_THICKNESS: f32 = 1.0;
        let body = self.body_font();
        let total_font = FontSpec::bold(self.theme.body_font.as_str(), self.config.body_size + 2.0);
        let block_width = 200.0_f32.min(self.content_width());

        let height = 2.0 * body.line_height()
            + RULE_GAP
            + RULE_THICKNESS
            + RULE_GAP
            + total_font.line_height();
        self.ensure_room(height);

        let top = self.cursor_y;
        let right = self.right();
        let label_x = right - block_width;

        let rows = [
            ("Subtotal".to_string(), format_currency(totals.subtotal)),
            (tax_label(totals.tax_rate), format_currency(totals.tax)),
        ];
        for (label, value) in &rows {
            self.push_text(label, label_x, self.cursor_y, &body, self.theme.secondary);
            self.push_text_right(value, right, self.cursor_y, &body, self.theme.secondary);
            self.cursor_y += body.line_height();
        }

        self.cursor_y += RULE_GAP;
        self.push(PositionedElement {
            x: label_x,
            y: self.cursor_y,
            width: block_width,
            height: RULE_THICKNESS,
            element: LayoutElement::Rule(RuleElement {
                color: self.theme.secondary,
                thickness: RULE_THICKNESS,
            }),
        });
        self.cursor_y += RULE_THICKNESS + RULE_GAP;

        self.push_text("Total", label_x, self.cursor_y, &total_font, self.theme.primary);
        self.push_text_right(
            &format_currency(totals.total),
            right,
            self.cursor_y,
            &total_font,
            self.theme.primary,
        );
        self.cursor_y += total_font.line_height();

        self.record_region(RegionKind::Totals, top);
        self.cursor_y += self.config.section_gap;
    }

    fn layout_notes(&mut self, notes: &str) {
        if notes.trim().is_empty() {
            return;
        }
        let label_font = self.label_font();
        let body = self.body_font();
        let lines = self.wrapped_lines(notes, self.content_width(), &body);

        // Keep the label attached to the first line; the body itself may
        // break between lines.
        self.ensure_room(label_font.line_height() + body.line_height());
        let mut segment_top = self.cursor_y;
        self.push_text("NOTES", self.left(), self.cursor_y, &label_font, self.theme.secondary);
        self.cursor_y += label_font.line_height() + 2.0;

        for line in &lines {
            if self.needs_page_break(body.line_height()) {
                self.record_region(RegionKind::Notes, segment_top);
                self.new_page();
                segment_top = self.cursor_y;
            }
            self.push_text(line, self.left(), self.cursor_y, &body, self.theme.secondary);
            self.cursor_y += body.line_height();
        }
        self.record_region(RegionKind::Notes, segment_top);
    }

    /// Stamp page footers and hand back the finished pages.
    fn finish(mut self) -> Vec<Page> {
        let total = self.pages.len();
        if total > 1 {
            let font = FontSpec::regular(self.theme.body_font.as_str(), 9.0);
            let color = self.theme.secondary.tint(0.4);
            let page_width = self.config.page.width();
            let y = (self.usable_bottom() + 14.0)
                .min(self.config.page.height() - font.line_height());
            let metrics = self.metrics;
            for (index, page) in self.pages.iter_mut().enumerate() {
                let content = format!("Page {} of {}", index + 1, total);
                let width = metrics.measure(&content, &font);
                page.elements.push(PositionedElement {
                    x: (page_width - width) / 2.0,
                    y,
                    width,
                    height: font.line_height(),
                    element: LayoutElement::Text(TextElement {
                        content,
                        font: font.clone(),
                        color,
                    }),
                });
            }
        }
        log::debug!(
            "laid out {} regions across {} pages",
            self.regions.len(),
            total
        );
        self.pages
    }
}

fn tax_label(rate: f64) -> String {
    let percent = rate * 100.0;
    if (percent - percent.round()).abs() < 1e-9 {
        format!("Tax ({:.0}%)", percent)
    } else {
        format!("Tax ({:.2}%)", percent)
    }
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{:.2}", quantity)
    }
}
