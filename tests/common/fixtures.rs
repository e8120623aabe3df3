use billow::{InvoiceDocument, LineItem, PartyInfo};

pub fn line_item(id: u64, description: &str, quantity: f64, rate: f64) -> LineItem {
    LineItem {
        id,
        description: description.to_string(),
        quantity,
        rate,
    }
}

/// A small, fully-populated invoice: one item at 2 × $50.00.
pub fn sample_invoice() -> InvoiceDocument {
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
            phone: Some("555-0100".to_string()),
            address: Some("1 Main St\nSpringfield".to_string()),
        },
        items: vec![line_item(1, "Design sprint", 2.0, 50.0)],
        notes: "Payment due within 30 days.".to_string(),
        theme: None,
    }
}

/// The sample invoice with `count` generated service lines instead.
pub fn invoice_with_items(count: usize) -> InvoiceDocument {
    let mut doc = sample_invoice();
    doc.items = (0..count)
        .map(|i| line_item(i as u64 + 1, &format!("Service line {}", i + 1), 1.0, 40.0))
        .collect();
    doc
}
