//! FNOL Validator
//!
//! Coerces a raw extraction into [`ClaimData`](fnol_domain::ClaimData) and
//! evaluates the mandatory-field checklist.
//!
//! Validation never fails. A raw extraction that does not fit the claim
//! schema (wrong types, a non-object value, malformed nested groups) is
//! replaced wholesale by an all-absent claim, so downstream stages never see
//! a half-typed result.
//!
//! # Examples
//!
//! ```
//! use fnol_validator::validate;
//! use serde_json::json;
//!
//! let (claim, missing) = validate(&json!({"claim_type": "Injury"}));
//! assert_eq!(claim.claim_type(), Some("Injury"));
//! assert_eq!(missing.len(), 7);
//! ```

#![warn(missing_docs)]

mod error;
mod validator;

pub use error::CoercionError;
pub use validator::{coerce, missing_fields, validate};
