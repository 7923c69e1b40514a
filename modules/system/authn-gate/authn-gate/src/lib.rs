//! `AuthN` Gate
//!
//! Turns an inbound request into an [`AuthenticatedContext`] or a rejection.
//!
//! - `domain::secret` - Argon2id hashing and verification
//! - `domain::credential` - `Authorization: Basic` parsing
//! - `domain::resolver` - principal lookup through the [`PrincipalLookup`] port
//! - `domain::gate` - the composed decision
//! - `api` - axum middleware and the `Authenticated` extractor
//!
//! [`AuthenticatedContext`]: campus_security::AuthenticatedContext
//! [`PrincipalLookup`]: authn_gate_sdk::PrincipalLookup
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod config;
pub mod domain;

pub use api::{AuthNState, Authenticated, authn_middleware, protect, require_authentication};
pub use config::{AuthNGateConfig, HashingConfig};
pub use domain::credential::{CredentialExtractor, ExtractError, basic_authorization_value};
pub use domain::error::SecretError;
pub use domain::gate::AuthenticationGate;
pub use domain::resolver::PrincipalResolver;
pub use domain::secret::SecretVerifier;
