//! FNOL Document Parser
//!
//! Turns an uploaded claim document into plain text for the extractor.
//! Only digital PDFs (embedded text layer) and plain-text files are
//! supported; there is no OCR and no layout analysis.
//!
//! # Examples
//!
//! ```
//! use fnol_document::{parse_bytes, DocumentKind};
//!
//! let kind = DocumentKind::from_file_name("claim.txt").unwrap();
//! let text = parse_bytes(kind, b"Policy number: P-1001").unwrap();
//! assert_eq!(text, "Policy number: P-1001");
//! ```

#![warn(missing_docs)]

mod error;
mod parser;

pub use error::DocumentError;
pub use parser::{parse_bytes, parse_path, DocumentKind};
