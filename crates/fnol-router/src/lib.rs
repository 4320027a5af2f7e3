//! FNOL Router
//!
//! Deterministic routing decision tree over a validated claim.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! 1. Any mandatory field missing → `Manual review`
//! 2. Description contains an investigation keyword → `Investigation Flag`
//! 3. Claim type is `injury` → `Specialist Queue`
//! 4. Estimated damage below the fast-track threshold → `Fast-track`
//! 5. Otherwise → `Standard Processing`
//!
//! # Examples
//!
//! ```
//! use fnol_domain::{ClaimData, MandatoryField, MissingFields, Route};
//! use fnol_router::{Router, RoutingConfig};
//!
//! let router = Router::new(RoutingConfig::default());
//! let missing = MissingFields::from_fields([MandatoryField::ClaimType]);
//! assert_eq!(router.route(&ClaimData::default(), &missing), Route::ManualReview);
//! ```

#![warn(missing_docs)]

mod config;
mod router;

pub use config::RoutingConfig;
pub use router::Router;
