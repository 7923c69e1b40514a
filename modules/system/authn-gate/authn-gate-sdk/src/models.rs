//! Decision models for the authentication gate.

use campus_security::AuthenticatedContext;

/// Why a request was not authenticated.
///
/// The display form is the internal diagnostic that goes to logs. Callers
/// only ever see one generic message regardless of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingCredential,
    MalformedCredential,
    UnknownPrincipal,
    SecretMismatch,
}

impl Rejection {
    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Self::MissingCredential => "missing header",
            Self::MalformedCredential => "malformed header",
            Self::UnknownPrincipal => "unknown identifier",
            Self::SecretMismatch => "bad secret",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Terminal outcome of running the gate on one request.
#[derive(Debug, Clone)]
pub enum GateDecision {
    Authenticated(AuthenticatedContext),
    Rejected(Rejection),
}

impl GateDecision {
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Authenticated(_) => None,
            Self::Rejected(r) => Some(*r),
        }
    }
}
