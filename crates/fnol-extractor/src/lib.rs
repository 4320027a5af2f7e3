//! FNOL Field Extractor
//!
//! Turns claim document text into a raw, loosely-structured field map by
//! prompting a language model for JSON.
//!
//! # Overview
//!
//! Model replies are unreliable: they may be wrapped in Markdown fences,
//! surrounded by prose, or not JSON at all. The Extractor strips fences,
//! parses strictly, and retries blindly up to the configured budget. On the
//! final attempt it falls back to parsing the span between the first `{`
//! and the last `}` of the reply.
//!
//! # Architecture
//!
//! ```text
//! Text → Extractor → LLM → RawExtraction → Validator
//! ```
//!
//! # Example Usage
//!
//! ```
//! use fnol_extractor::{Extractor, ExtractorConfig};
//! use fnol_llm::MockProvider;
//!
//! # tokio_test::block_on(async {
//! let llm = MockProvider::new("```json\n{\"claim_type\": \"Auto\"}\n```");
//! let extractor = Extractor::new(llm, ExtractorConfig::default());
//!
//! let raw = extractor.extract("Auto claim, policy P-1001").await.unwrap();
//! assert_eq!(raw["claim_type"], "Auto");
//! # });
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use parser::{parse_reply, recover_json, strip_code_fences};
pub use prompt::PromptBuilder;
