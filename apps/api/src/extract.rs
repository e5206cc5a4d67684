//! Text extraction for uploaded resume documents.

use bytes::Bytes;

use crate::errors::AppError;

/// Declared media type of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Maps the upload's declared content type to a document kind.
    /// Anything that is not a PDF is treated as plain text.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some("application/pdf") => DocumentKind::Pdf,
            _ => DocumentKind::PlainText,
        }
    }
}

/// An uploaded resume: raw bytes plus declared media type.
/// Created on upload, consumed once by `extract_text`, dropped with the run.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub kind: DocumentKind,
    pub bytes: Bytes,
}

/// Extracts a single plain-text string from an uploaded document.
///
/// PDFs go through `pdf_extract`, which concatenates the visible text of
/// every page in page order; pages without extractable text contribute
/// nothing. Plain-text uploads are decoded as UTF-8. No normalization is
/// applied either way.
pub fn extract_text(document: &UploadedDocument) -> Result<String, AppError> {
    match document.kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&document.bytes)
            .map_err(|e| AppError::DocumentRead(e.to_string())),
        DocumentKind::PlainText => std::str::from_utf8(&document.bytes)
            .map(str::to_owned)
            .map_err(|e| AppError::Encoding(e.to_string())),
    }
}
