#![cfg(test)]

use crate::{ApproxMetrics, LayoutConfig, LayoutElement, LayoutEngine, Page, PositionedElement};
use billow_doc::{InvoiceDocument, LineItem, PartyInfo};
use billow_style::{Margins, PageLayout, PageSize, ResolvedTheme, Theme, ThemeColors};
use billow_types::Color;

fn item(id: u64, description: &str, quantity: f64, rate: f64) -> LineItem {
    LineItem {
        id,
        description: description.to_string(),
        quantity,
        rate,
    }
}

fn sample_doc(item_count: usize) -> InvoiceDocument {
    InvoiceDocument {
        invoice_number: "INV-042".to_string(),
        invoice_date: "2024-05-01".to_string(),
        due_date: "2024-05-31".to_string(),
        issuer_name: "Acme Studio".to_string(),
        issuer_email: Some("billing@acme.test".to_string()),
        bill_to: PartyInfo {
            name: "Jane Client".to_string(),
            company: Some("Client Co".to_string()),
            email: Some("jane@client.test".to_string()),
            phone: None,
            address: Some("1 Main St\nSpringfield".to_string()),
        },
        items: (0..item_count)
            .map(|i| item(i as u64 + 1, &format!("Service line {}", i + 1), 1.0, (i + 1) as f64))
            .collect(),
        notes: "Payment due within 30 days.".to_string(),
        theme: None,
    }
}

fn layout_with_theme(doc: &InvoiceDocument, theme: &ResolvedTheme) -> Vec<Page> {
    let config = LayoutConfig::default();
    let metrics = ApproxMetrics::default();
    LayoutEngine::new(&config, theme, &metrics)
        .unwrap()
        .layout_document(doc)
}

fn layout_pages(doc: &InvoiceDocument) -> Vec<Page> {
    layout_with_theme(doc, &ResolvedTheme::default())
}

fn page_texts(page: &Page) -> Vec<&str> {
    page.elements
        .iter()
        .filter_map(|el| match &el.element {
            LayoutElement::Text(text) => Some(text.content.as_str()),
            _ => None,
        })
        .collect()
}

fn contains_text(page: &Page, needle: &str) -> bool {
    page_texts(page).iter().any(|t| t.contains(needle))
}

fn is_footer(el: &PositionedElement) -> bool {
    matches!(&el.element, LayoutElement::Text(t) if t.content.starts_with("Page "))
}

#[test]
fn small_invoice_fits_one_page() {
    let pages = layout_pages(&sample_doc(3));
    assert_eq!(pages.len(), 1);
    let page = &pages[0];
    for needle in ["INVOICE", "INV-042", "BILL TO", "Description", "Subtotal", "Total", "NOTES"] {
        assert!(contains_text(page, needle), "missing '{}'", needle);
    }
}

#[test]
fn totals_block_renders_formatted_amounts() {
    let doc = InvoiceDocument {
        items: vec![item(1, "Consulting", 2.0, 50.0)],
        ..sample_doc(0)
    };
    let pages = layout_pages(&doc);
    let page = &pages[0];
    assert!(contains_text(page, "$100.00"));
    assert!(contains_text(page, "Tax (8%)"));
    assert!(contains_text(page, "$8.00"));
    assert!(contains_text(page, "$108.00"));
}

#[test]
fn long_item_list_overflows_to_more_pages() {
    let pages = layout_pages(&sample_doc(60));
    assert!(pages.len() >= 2, "expected overflow, got {} page(s)", pages.len());
}

#[test]
fn continuation_page_starts_with_repeated_header() {
    let theme = ResolvedTheme::default();
    let pages = layout_with_theme(&sample_doc(60), &theme);
    assert!(pages.len() >= 2);

    let second = &pages[1];
    match &second.elements[0].element {
        LayoutElement::Rect(rect) => assert_eq!(rect.fill, theme.primary),
        other => panic!("expected header background first, got {:?}", other),
    }
    assert!(contains_text(second, "Description"));
}

#[test]
fn header_repeats_on_every_page_the_table_spans() {
    let pages = layout_pages(&sample_doc(120));
    assert!(pages.len() >= 3);
    for page in &pages {
        if contains_text(page, "Service line") {
            assert!(
                contains_text(page, "Description"),
                "page {} has rows but no header",
                page.number + 1
            );
        }
    }
}

#[test]
fn no_content_crosses_the_bottom_margin() {
    let config = LayoutConfig::default();
    let usable_bottom = config.page.height() - config.page.margins.bottom;
    let pages = layout_pages(&sample_doc(120));
    for page in &pages {
        for el in page.elements.iter().filter(|el| !is_footer(el)) {
            assert!(
                el.y + el.height <= usable_bottom + 0.5,
                "element at y={} h={} crosses bottom margin on page {}",
                el.y,
                el.height,
                page.number + 1
            );
        }
    }
}

#[test]
fn rows_never_split_across_pages() {
    // Each description wraps into three lines with unique tokens; every
    // token of a row must land on the same page.
    let mut doc = sample_doc(0);
    doc.items = (0..40)
        .map(|i| {
            item(
                i + 1,
                &format!(
                    "first{i:03}word second{i:03}word third{i:03}word fourth{i:03}word fifth{i:03}word"
                ),
                1.0,
                25.0,
            )
        })
        .collect();

    let pages = layout_pages(&doc);
    assert!(pages.len() >= 2);

    for i in 0..40 {
        let tokens = [
            format!("first{i:03}word"),
            format!("third{i:03}word"),
            format!("fifth{i:03}word"),
        ];
        let holding_pages: Vec<usize> = pages
            .iter()
            .filter(|page| tokens.iter().any(|t| contains_text(page, t)))
            .map(|page| page.number)
            .collect();
        assert_eq!(
            holding_pages.len(),
            1,
            "row {} spans pages {:?}",
            i,
            holding_pages
        );
        for token in &tokens {
            assert!(
                contains_text(&pages[holding_pages[0]], token),
                "token {} separated from its row",
                token
            );
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let doc = sample_doc(25);
    assert_eq!(layout_pages(&doc), layout_pages(&doc));
}

#[test]
fn empty_item_list_still_renders_header_and_zero_totals() {
    let pages = layout_pages(&sample_doc(0));
    let page = &pages[0];
    assert!(contains_text(page, "Description"));
    assert!(contains_text(page, "$0.00"));
}

#[test]
fn footer_page_numbers_appear_only_when_multipage() {
    let single = layout_pages(&sample_doc(2));
    assert!(!contains_text(&single[0], "Page 1 of"));

    let multi = layout_pages(&sample_doc(80));
    assert!(multi.len() >= 2);
    for (index, page) in multi.iter().enumerate() {
        let marker = format!("Page {} of {}", index + 1, multi.len());
        assert!(contains_text(page, &marker), "missing '{}'", marker);
    }
}

#[test]
fn applied_theme_colors_flow_into_elements() {
    let purple = Color::new(0x93, 0x33, 0xea);
    let theme = Theme {
        colors: ThemeColors {
            primary: Some(purple),
            ..Default::default()
        },
        ..Default::default()
    };
    let resolved = ResolvedTheme::resolve(Some(&theme));
    let doc = sample_doc(3);
    let pages = layout_with_theme(&doc, &resolved);

    let title = pages[0]
        .elements
        .iter()
        .find_map(|el| match &el.element {
            LayoutElement::Text(t) if t.content == "INVOICE" => Some(t),
            _ => None,
        })
        .expect("title element");
    assert_eq!(title.color, purple);
    assert!(title.font.weight.is_bold());
}

#[test]
fn notes_are_skipped_when_empty() {
    let mut doc = sample_doc(2);
    doc.notes = "   ".to_string();
    let pages = layout_pages(&doc);
    assert!(!contains_text(&pages[0], "NOTES"));
}

#[test]
fn margins_leaving_no_room_are_rejected() {
    let config = LayoutConfig {
        page: PageLayout {
            size: PageSize::Custom {
                width: 80.0,
                height: 80.0,
            },
            margins: Margins::all(50.0),
        },
        ..LayoutConfig::default()
    };
    let theme = ResolvedTheme::default();
    let metrics = ApproxMetrics::default();
    assert!(LayoutEngine::new(&config, &theme, &metrics).is_err());
}
