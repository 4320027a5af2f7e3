//! Validator error types

use thiserror::Error;

/// The raw extraction does not fit the claim schema
///
/// Never escapes [`validate`](crate::validate); it is logged and replaced
/// by an all-absent claim.
#[derive(Error, Debug)]
pub enum CoercionError {
    /// A claim or field group was not a JSON object
    #[error("Expected an object at '{path}', found {found}")]
    NotAnObject {
        /// Dotted path of the offending value (empty for the root)
        path: String,
        /// JSON type that was found instead
        found: &'static str,
    },

    /// A field value had the wrong type
    #[error("Claim coercion failed: {0}")]
    Schema(#[from] serde_json::Error),
}
