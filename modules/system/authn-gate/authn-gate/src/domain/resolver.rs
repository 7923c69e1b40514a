//! Principal resolution through the lookup port.

use std::sync::Arc;

use authn_gate_sdk::{PrincipalLookup, PrincipalLookupError};
use campus_security::Principal;

/// Maps a claimed identifier to at most one stored principal.
///
/// Pure pass-through to the injected [`PrincipalLookup`]; no caching, so each
/// call reflects the current store.
#[derive(Clone)]
pub struct PrincipalResolver {
    lookup: Arc<dyn PrincipalLookup>,
}

impl PrincipalResolver {
    #[must_use]
    pub fn new(lookup: Arc<dyn PrincipalLookup>) -> Self {
        Self { lookup }
    }

    /// Resolve an identifier by exact match.
    ///
    /// # Errors
    ///
    /// Propagates [`PrincipalLookupError`] from the port unchanged.
    pub async fn resolve(
        &self,
        identifier: &str,
    ) -> Result<Option<Principal>, PrincipalLookupError> {
        self.lookup.find_principal_by_identifier(identifier).await
    }
}
