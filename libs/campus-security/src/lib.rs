#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod context;
pub mod credential;
pub mod ownership;
pub mod principal;

pub use context::AuthenticatedContext;
pub use credential::Credential;
pub use ownership::{AccessDecision, OwnedResource, OwnershipAuthorizer, OwnershipViolation};
pub use principal::{Principal, PrincipalId};
