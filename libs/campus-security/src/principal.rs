use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a stored principal (the users table primary key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(i64);

impl PrincipalId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PrincipalId {
    #[inline]
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored principal as seen by the authentication gate.
///
/// Owned by the persistence layer; the gate only reads it. The secret hash is
/// a PHC string and is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Principal {
    id: PrincipalId,
    identifier: String,
    secret_hash: String,
}

impl Principal {
    #[must_use]
    pub fn new(
        id: impl Into<PrincipalId>,
        identifier: impl Into<String>,
        secret_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            identifier: identifier.into(),
            secret_hash: secret_hash.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PrincipalId {
        self.id
    }

    /// The unique login identifier (username).
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn secret_hash(&self) -> &str {
        &self.secret_hash
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("identifier", &self.identifier)
            .field("secret_hash", &"[REDACTED]")
            .finish()
    }
}
