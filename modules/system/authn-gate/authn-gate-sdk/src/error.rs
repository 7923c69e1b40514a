//! Error types for the authentication gate.

use thiserror::Error;

/// Failures of the principal lookup port.
#[derive(Debug, Error)]
pub enum PrincipalLookupError {
    /// The backing store is unreachable or timed out.
    #[error("principal store unavailable: {0}")]
    Unavailable(String),

    /// Any other unexpected storage failure.
    #[error("principal lookup failed: {0}")]
    Internal(String),
}

/// Faults that are not authentication outcomes.
///
/// These never map to 401/403: they surface as server-side errors so that a
/// 401 keeps meaning "credential problem" and nothing else.
#[derive(Debug, Error)]
pub enum GateFault {
    #[error(transparent)]
    Lookup(#[from] PrincipalLookupError),

    /// The secret verification task failed to run to completion.
    #[error("secret verification failed: {0}")]
    Hashing(String),
}
