//! Document text extraction. PDF decoding is delegated to `pdf-extract`.

use crate::errors::AnalysisError;

/// Turns an uploaded document into plain text (pages concatenated in order).
/// Implementations are synchronous; callers run them on a blocking thread.
pub trait DocumentExtractor: Send + Sync {
    fn extract_text(&self, name: &str, bytes: &[u8]) -> Result<String, AnalysisError>;
}

const PDF_MAGIC: &[u8] = b"%PDF-";

pub struct PdfExtractor;

impl DocumentExtractor for PdfExtractor {
    fn extract_text(&self, name: &str, bytes: &[u8]) -> Result<String, AnalysisError> {
        if !looks_like_pdf(bytes) {
            return Err(AnalysisError::DocumentParse {
                name: name.to_string(),
                reason: "not a PDF document".to_string(),
            });
        }
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| AnalysisError::DocumentParse {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}

/// PDF headers may be preceded by up to 1024 bytes of junk.
fn looks_like_pdf(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024 + PDF_MAGIC.len())];
    head.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}
