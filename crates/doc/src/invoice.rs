//! The invoice document model.
//!
//! This is the wire shape the form collaborator hands over at export time
//! (camelCase JSON). The document is a snapshot: the layout engine never
//! mutates it, and any edit on the caller's side produces a new document.

use billow_style::Theme;
use serde::{Deserialize, Serialize};

/// One billable row. `amount` is derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: u64,
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
}

impl LineItem {
    /// `quantity × rate`, recomputed on every call so no stale value can
    /// survive an edit.
    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyInfo {
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Multi-line postal address, lines separated by `\n`.
    pub address: Option<String>,
}

/// Everything the layout engine needs to compose one invoice.
///
/// Dates are display strings supplied by the caller; the engine renders
/// them verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceDocument {
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub issuer_name: String,
    pub issuer_email: Option<String>,
    pub bill_to: PartyInfo,
    pub items: Vec<LineItem>,
    pub notes: String,
    pub theme: Option<Theme>,
}
