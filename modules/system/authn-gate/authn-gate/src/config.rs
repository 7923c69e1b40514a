//! Configuration for the authentication gate.

use serde::{Deserialize, Serialize};

/// Gate configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthNGateConfig {
    /// Realm advertised in the `WWW-Authenticate` challenge.
    pub realm: String,

    /// Argon2id work factor used for new hashes.
    pub hashing: HashingConfig,
}

impl Default for AuthNGateConfig {
    fn default() -> Self {
        Self {
            realm: "campus".to_owned(),
            hashing: HashingConfig::default(),
        }
    }
}

/// Argon2id cost parameters.
///
/// Existing hashes keep verifying after a change: verification reads the
/// parameters embedded in each stored PHC string.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HashingConfig {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

impl HashingConfig {
    /// Cheapest parameters Argon2 accepts. For tests only.
    #[must_use]
    pub fn insecure_fast() -> Self {
        Self {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }
}
