//! FNOL Claims Pipeline
//!
//! Wires the stages together and owns process-wide configuration.
//!
//! # Architecture
//!
//! ```text
//! Document → Parser → Extractor → Validator → Router → Reasoner → Response
//! ```
//!
//! Only document parsing and extraction can fail a request; their errors
//! are tagged with the failing stage (see [`PipelineError::stage`]). Every
//! later stage degrades instead: an unusable extraction becomes an empty
//! claim routed to manual review, and an unavailable model yields templated
//! reasoning.
//!
//! # Example Usage
//!
//! ```
//! use fnol_domain::Route;
//! use fnol_llm::{MockProvider, ProviderKind};
//! use fnol_pipeline::{ClaimsConfig, Pipeline};
//!
//! # tokio_test::block_on(async {
//! let mut config = ClaimsConfig::default();
//! config.llm.provider = ProviderKind::Mock;
//!
//! let llm = MockProvider::new("Routed for manual review.");
//! llm.push_response(r#"{"claim_type": "Injury"}"#);
//!
//! let pipeline = Pipeline::new(llm, &config);
//! let response = pipeline.process_text("Injury claim, details to follow").await.unwrap();
//! assert_eq!(response.recommended_route, Route::ManualReview);
//! assert_eq!(response.missing_fields.len(), 7);
//! # });
//! ```

#![warn(missing_docs)]

pub mod config;
mod error;
mod pipeline;
mod telemetry;

pub use config::{ClaimsConfig, ServerConfig};
pub use error::{ConfigError, PipelineError};
pub use pipeline::Pipeline;
pub use telemetry::init_tracing;
