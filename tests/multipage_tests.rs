mod common;

use common::fixtures::*;
use common::pdf_assertions::extract_page_text;
use common::{generate_pdf, TestResult};

#[test]
fn test_long_item_list_spans_multiple_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&invoice_with_items(60))?;
    assert!(
        pdf.page_count() > 1,
        "60 rows should overflow one page, got {}",
        pdf.page_count()
    );
    assert_pdf_contains_text!(pdf, "Service line 1");
    assert_pdf_contains_text!(pdf, "Service line 60");
    Ok(())
}

#[test]
fn test_table_header_repeats_on_every_table_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&invoice_with_items(120))?;
    assert!(pdf.page_count() >= 3);

    for page_num in 1..=pdf.page_count() as u32 {
        let text = extract_page_text(&pdf.doc, page_num);
        if text.contains("Service line") {
            assert!(
                text.contains("Description"),
                "page {} has table rows but no header row",
                page_num
            );
        }
    }
    Ok(())
}

#[test]
fn test_continuation_page_repeats_header_before_rows() -> TestResult {
    let pdf = generate_pdf(&invoice_with_items(60))?;
    assert!(pdf.page_count() >= 2);
    let second = extract_page_text(&pdf.doc, 2);
    assert!(second.contains("Description"), "second page must reopen with the header");
    assert!(second.contains("Service line"));
    Ok(())
}

#[test]
fn test_footer_page_numbers_on_multipage_export() -> TestResult {
    let pdf = generate_pdf(&invoice_with_items(80))?;
    let total = pdf.page_count();
    assert!(total >= 2);
    for page_num in 1..=total as u32 {
        let text = extract_page_text(&pdf.doc, page_num);
        let marker = format!("Page {} of {}", page_num, total);
        assert!(text.contains(&marker), "page {} missing '{}'", page_num, marker);
    }
    Ok(())
}

#[test]
fn test_single_page_export_has_no_footer() -> TestResult {
    let pdf = generate_pdf(&sample_invoice())?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_not_contains_text!(pdf, "Page 1 of");
    Ok(())
}

#[test]
fn test_long_notes_continue_across_pages() -> TestResult {
    let mut doc = invoice_with_items(40);
    doc.notes = "Every line item above reflects work delivered during the billing period. "
        .repeat(30);
    let pdf = generate_pdf(&doc)?;
    assert!(pdf.page_count() >= 2);
    assert_pdf_contains_text!(pdf, "NOTES");
    assert_pdf_contains_text!(pdf, "delivered");
    Ok(())
}
