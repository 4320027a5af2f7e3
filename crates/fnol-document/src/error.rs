//! Error types for document parsing

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a document into text
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file extension is not `.pdf` or `.txt`
    #[error("Unsupported file type: {0}. Supported types: .pdf, .txt")]
    UnsupportedType(String),

    /// The PDF could not be read
    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    /// I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document yielded no text
    #[error("Document appears to be empty or could not extract text")]
    Empty,
}
