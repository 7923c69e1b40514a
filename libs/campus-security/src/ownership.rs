//! Resource ownership authorization.
//!
//! A single rule: an authenticated principal may mutate a resource only when
//! the resource's owner is that principal. There are no roles, groups or
//! delegation. Reads are not ownership-gated.

use thiserror::Error;

use crate::context::AuthenticatedContext;
use crate::principal::PrincipalId;

/// Anything that names the principal allowed to mutate it.
pub trait OwnedResource {
    /// Resource kind used in diagnostics (e.g. `"course"`).
    const KIND: &'static str;

    fn owner_id(&self) -> PrincipalId;
}

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

impl AccessDecision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// The principal tried to mutate a resource owned by someone else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} is owned by principal {owner_id}, not by principal {principal_id}")]
pub struct OwnershipViolation {
    pub kind: &'static str,
    pub owner_id: PrincipalId,
    pub principal_id: PrincipalId,
}

/// Stateless ownership authorizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipAuthorizer;

impl OwnershipAuthorizer {
    /// `Allow` iff `resource.owner_id() == ctx.principal().id()`.
    #[must_use]
    pub fn authorize<R: OwnedResource + ?Sized>(
        ctx: &AuthenticatedContext,
        resource: &R,
    ) -> AccessDecision {
        if resource.owner_id() == ctx.principal_id() {
            AccessDecision::Allow
        } else {
            AccessDecision::Deny
        }
    }

    /// Like [`OwnershipAuthorizer::authorize`] but returns an error on `Deny`.
    ///
    /// # Errors
    ///
    /// Returns [`OwnershipViolation`] when the principal does not own the resource.
    pub fn ensure_owner<R: OwnedResource + ?Sized>(
        ctx: &AuthenticatedContext,
        resource: &R,
    ) -> Result<(), OwnershipViolation> {
        match Self::authorize(ctx, resource) {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny => Err(OwnershipViolation {
                kind: R::KIND,
                owner_id: resource.owner_id(),
                principal_id: ctx.principal_id(),
            }),
        }
    }
}
