//! Document-to-text parsing for PDF and plain-text claim documents

use crate::error::DocumentError;
use std::path::Path;
use tracing::{debug, info};

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF with an embedded text layer
    Pdf,
    /// Plain text, UTF-8 or Latin-1
    Text,
}

impl DocumentKind {
    /// Detect the kind from a file name's extension (case-insensitive)
    pub fn from_file_name(name: &str) -> Result<Self, DocumentError> {
        Self::from_path(Path::new(name))
    }

    /// Detect the kind from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default();

        match extension.as_str() {
            ".pdf" => Ok(DocumentKind::Pdf),
            ".txt" => Ok(DocumentKind::Text),
            _ => Err(DocumentError::UnsupportedType(extension)),
        }
    }
}

/// Parse a document on disk into text
///
/// # Errors
///
/// - `NotFound` if the path does not exist
/// - `UnsupportedType` if the extension is not `.pdf` or `.txt`
/// - `Pdf` / `Io` on read failures
/// - `Empty` if no text could be extracted
pub fn parse_path(path: &Path) -> Result<String, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }

    let kind = DocumentKind::from_path(path)?;
    let bytes = std::fs::read(path)?;
    let text = parse_bytes(kind, &bytes)?;

    info!(
        path = %path.display(),
        chars = text.chars().count(),
        "Parsed document"
    );
    Ok(text)
}

/// Parse in-memory document bytes of a known kind into text
pub fn parse_bytes(kind: DocumentKind, bytes: &[u8]) -> Result<String, DocumentError> {
    let text = match kind {
        DocumentKind::Pdf => parse_pdf(bytes)?,
        DocumentKind::Text => decode_text(bytes),
    };

    if text.trim().is_empty() {
        return Err(DocumentError::Empty);
    }
    Ok(text)
}

fn parse_pdf(bytes: &[u8]) -> Result<String, DocumentError> {
    // pdf-extract panics on some malformed font tables
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| DocumentError::Pdf("PDF text extraction aborted".to_string()))?
        .map_err(|e| DocumentError::Pdf(e.to_string()))
}

/// Decode text as UTF-8, falling back to Latin-1
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback never fails.
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            debug!("Text is not valid UTF-8 ({}), decoding as Latin-1", e);
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}
