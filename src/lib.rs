//! billow: invoice document composition and PDF export.
//!
//! One export call runs totals computation, theme resolution, page
//! layout, and PDF rendering to completion over an immutable document
//! snapshot; the only side-effecting step is delivery, kept behind the
//! [`Deliver`] trait.

pub mod delivery;
pub mod exporter;

pub use delivery::{Deliver, DeliveryError, Destination, FileSink};
pub use exporter::{export, suggested_file_name, ExportArtifact};

pub use billow_doc::{InvoiceDocument, LineItem, PartyInfo, Totals};
pub use billow_layout::LayoutConfig;
pub use billow_style::{ResolvedTheme, Theme};

use thiserror::Error;

/// The main error enum for all high-level operations in the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Layout error: {0}")]
    Layout(String),
    #[error("Rendering error: {0}")]
    Render(String),
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),
    #[error("Other pipeline error: {0}")]
    Other(String),
}

impl From<billow_layout::LayoutError> for PipelineError {
    fn from(e: billow_layout::LayoutError) -> Self {
        PipelineError::Layout(e.to_string())
    }
}

impl From<billow_render_lopdf::RenderError> for PipelineError {
    fn from(e: billow_render_lopdf::RenderError) -> Self {
        PipelineError::Render(e.to_string())
    }
}
