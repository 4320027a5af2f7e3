//! FNOL Reasoning Generator
//!
//! Produces a short, human-readable justification for a routing decision.
//!
//! The explanation comes from a language model when one answers within the
//! retry budget. Otherwise a deterministic template keyed on the route is
//! returned, so [`Reasoner::explain`] never fails.
//!
//! # Examples
//!
//! ```
//! use fnol_domain::{ClaimData, MissingFields, Route};
//! use fnol_llm::MockProvider;
//! use fnol_reasoning::{Reasoner, ReasoningConfig};
//!
//! # tokio_test::block_on(async {
//! let reasoner = Reasoner::new(MockProvider::failing(), ReasoningConfig::default());
//! let text = reasoner
//!     .explain(&ClaimData::default(), &MissingFields::none(), Route::FastTrack)
//!     .await;
//! assert_eq!(text, "Claim routed to Fast-track due to estimated damage below threshold.");
//! # });
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod fallback;
mod prompt;
mod reasoner;

pub use config::ReasoningConfig;
pub use error::ReasoningError;
pub use fallback::fallback_reasoning;
pub use prompt::build_prompt;
pub use reasoner::Reasoner;
