pub mod fixtures;
pub mod pdf_assertions;

use billow::{export, InvoiceDocument, LayoutConfig, PipelineError};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// Export an invoice with the default layout config and parse the result
pub fn generate_pdf(doc: &InvoiceDocument) -> Result<GeneratedPdf, PipelineError> {
    generate_pdf_with_config(doc, &LayoutConfig::default())
}

/// Export an invoice with the provided layout config and parse the result
pub fn generate_pdf_with_config(
    doc: &InvoiceDocument,
    config: &LayoutConfig,
) -> Result<GeneratedPdf, PipelineError> {
    let artifact = export(doc, config)?;
    GeneratedPdf::from_bytes(artifact.bytes).map_err(|e| PipelineError::Other(e.to_string()))
}
