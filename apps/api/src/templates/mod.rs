// Résumé templates.
// Each composer is a single linear pass from an empty Document to a fully
// populated one. Composers share no state; a Document is built fresh per call.

pub mod headers;
pub mod modern;
pub mod professional;

use tracing::debug;

use crate::document::{Document, DocumentError};
use crate::models::resume::{ResumeInputs, TemplateVariant};

pub use modern::compose_modern;
pub use professional::compose_professional;

/// Builds the document for the selected template without serializing it.
pub fn compose(variant: TemplateVariant, inputs: &ResumeInputs) -> Document {
    let doc = match variant {
        TemplateVariant::Professional => compose_professional(inputs),
        TemplateVariant::ModernTwoColumn => compose_modern(inputs),
    };
    debug!(
        "Composed {} template: {} top-level blocks",
        variant.label(),
        doc.body.len()
    );
    doc
}

/// Composes and serializes a résumé to `.docx` bytes.
pub fn render_resume(
    variant: TemplateVariant,
    inputs: &ResumeInputs,
) -> Result<Vec<u8>, DocumentError> {
    compose(variant, inputs).to_docx_bytes()
}
