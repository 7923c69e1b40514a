//! Outbound port of the authentication gate.

use async_trait::async_trait;
use campus_security::Principal;

use crate::error::PrincipalLookupError;

/// Finds stored principals by their login identifier.
///
/// Implemented by the persistence layer and injected into the gate. Every call
/// must reflect the current store state; the gate does not cache results.
///
/// ```ignore
/// let principal = lookup.find_principal_by_identifier("alice").await?;
/// ```
#[async_trait]
pub trait PrincipalLookup: Send + Sync {
    /// Exact-match lookup. No wildcard, prefix or case-folding matching.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backing store cannot be reached
    /// - `Internal` for any other unexpected storage failure
    async fn find_principal_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Principal>, PrincipalLookupError>;
}
