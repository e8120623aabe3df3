//! Invoice totals computation.
//!
//! Pure and deterministic: the caller re-runs `compute` on every item
//! mutation instead of patching derived fields incrementally.

use crate::invoice::LineItem;
use billow_types::round2;
use serde::Serialize;

pub const DEFAULT_TAX_RATE: f64 = 0.08;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
}

/// Compute invoice totals over `items` at `tax_rate`.
///
/// The subtotal is the exact sum of exact line amounts; rounding happens
/// once at the tax stage so per-line error cannot compound. Negative
/// quantities or rates pass through arithmetically; domain validation
/// belongs to the form layer.
pub fn compute(items: &[LineItem], tax_rate: f64) -> Totals {
    let subtotal: f64 = items.iter().map(LineItem::amount).sum();
    let tax = round2(subtotal * tax_rate);
    Totals {
        subtotal,
        tax_rate,
        tax,
        total: subtotal + tax,
    }
}
