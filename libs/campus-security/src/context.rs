use crate::principal::{Principal, PrincipalId};

/// `AuthenticatedContext` is the per-request proof that a credential was
/// verified.
///
/// Built by the authentication gate after the presented secret matched the
/// principal's stored hash within the same request. Handlers receive it from
/// the gate middleware and pass it explicitly into service calls; it is
/// dropped together with the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedContext {
    principal: Principal,
}

impl AuthenticatedContext {
    #[must_use]
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    /// Get the authenticated principal.
    #[must_use]
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Shorthand for `self.principal().id()`.
    #[must_use]
    pub fn principal_id(&self) -> PrincipalId {
        self.principal.id()
    }

    /// Shorthand for `self.principal().identifier()`.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.principal.identifier()
    }
}
