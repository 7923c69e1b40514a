//! `AuthN` Gate SDK
//!
//! This crate provides the public contract of the `authn_gate` module:
//!
//! - [`PrincipalLookup`] - Port the gate uses to find stored principals
//! - [`GateDecision`] / [`Rejection`] - Outcome of authenticating one request
//! - [`GateFault`] / [`PrincipalLookupError`] - Non-authentication failures
//!
//! ## Usage
//!
//! Storage modules implement the lookup port and hand it to the gate:
//!
//! ```ignore
//! use authn_gate_sdk::PrincipalLookup;
//!
//! let lookup: Arc<dyn PrincipalLookup> = Arc::new(SeaOrmPrincipalLookup::new(db));
//! let gate = AuthenticationGate::new(lookup, SecretVerifier::from_config(&cfg.hashing)?);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::PrincipalLookup;
pub use error::{GateFault, PrincipalLookupError};
pub use models::{GateDecision, Rejection};
