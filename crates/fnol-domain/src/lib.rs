//! FNOL Domain Layer
//!
//! Core value objects for first-notice-of-loss triage. Every type here is
//! request-scoped: built once per processed document, never shared, never
//! persisted.
//!
//! ## Key Concepts
//!
//! - **ClaimData**: the typed claim, every field independently optional
//! - **RawExtraction**: the untyped JSON the language model produced
//! - **MissingFields**: checklist paths absent from a claim, in checklist order
//! - **Route**: one of five routing destinations
//! - **TextGenerator**: the language-model capability consumed by the pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checklist;
pub mod claim;
pub mod response;
pub mod route;
pub mod traits;

// Re-exports for convenience
pub use checklist::{MandatoryField, MissingFields};
pub use claim::{
    AssetDetails, ClaimData, IncidentInformation, InvolvedParties, PolicyInformation,
    RawExtraction,
};
pub use response::ProcessedClaimResponse;
pub use route::Route;
pub use traits::{GenerationParams, TextGenerator};
