//! End-to-end export: document snapshot in, named PDF artifact out.

use crate::PipelineError;
use billow_doc::InvoiceDocument;
use billow_layout::{ApproxMetrics, LayoutConfig, LayoutEngine};
use billow_render_lopdf::PdfRenderer;
use billow_style::ResolvedTheme;

/// A finished export. The bytes survive a failed delivery, so delivery
/// alone can be retried without recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// Run the composition pipeline over one document snapshot.
///
/// Deterministic: the same document and config produce byte-identical
/// artifacts.
pub fn export(
    doc: &InvoiceDocument,
    config: &LayoutConfig,
) -> Result<ExportArtifact, PipelineError> {
    let theme = ResolvedTheme::resolve(doc.theme.as_ref());
    let metrics = ApproxMetrics::default();
    let pages = LayoutEngine::new(config, &theme, &metrics)?.layout_document(doc);
    log::info!(
        "laid out invoice '{}' across {} page(s)",
        doc.invoice_number,
        pages.len()
    );
    let bytes = PdfRenderer::new().render(&pages, &config.page)?;
    Ok(ExportArtifact {
        bytes,
        file_name: suggested_file_name(&doc.invoice_number),
    })
}

/// `invoice-<number>.pdf`, slugged for the filesystem. An empty or
/// unsluggable invoice number falls back to a timestamp so the name is
/// never empty or malformed.
pub fn suggested_file_name(invoice_number: &str) -> String {
    let slug = slug::slugify(invoice_number);
    if slug.is_empty() {
        format!("invoice-{}.pdf", chrono::Utc::now().timestamp())
    } else {
        format!("invoice-{}.pdf", slug)
    }
}
