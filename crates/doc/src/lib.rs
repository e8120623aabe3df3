pub mod invoice;
pub mod totals;

pub use invoice::{InvoiceDocument, LineItem, PartyInfo};
pub use totals::{compute, Totals, DEFAULT_TAX_RATE};
