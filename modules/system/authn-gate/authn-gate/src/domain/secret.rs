//! Secret hashing and verification using Argon2id.

use argon2::{Algorithm, Argon2, Params, Version};
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use secrecy::{ExposeSecret, SecretString};

use crate::config::HashingConfig;
use crate::domain::error::SecretError;

/// One-way secret hasher/verifier.
///
/// Every hash gets a fresh random salt, so hashing the same secret twice
/// yields two different PHC strings that both verify.
#[derive(Debug, Clone)]
pub struct SecretVerifier {
    params: Params,
}

impl SecretVerifier {
    /// Build a verifier with the configured Argon2id cost.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::InvalidParams`] if Argon2 rejects the parameters.
    pub fn from_config(cfg: &HashingConfig) -> Result<Self, SecretError> {
        let params = Params::new(cfg.memory_kib, cfg.iterations, cfg.parallelism, None)
            .map_err(|e| SecretError::InvalidParams(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a secret and return the PHC-formatted string (salt and
    /// parameters included).
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::Hashing`] if Argon2 fails.
    pub fn hash(&self, plaintext: &str) -> Result<String, SecretError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| SecretError::Hashing(e.to_string()))
    }

    /// Verify a secret against a stored PHC hash.
    ///
    /// The digest comparison is constant-time. A malformed stored hash never
    /// matches.
    #[must_use]
    pub fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        let parsed = match PasswordHash::new(hashed) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "stored secret hash is malformed");
                return false;
            }
        };

        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }

    /// [`SecretVerifier::hash`] on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::Hashing`] if Argon2 fails, or
    /// [`SecretError::Task`] if the blocking task panicked or was cancelled.
    pub async fn hash_async(&self, plaintext: SecretString) -> Result<String, SecretError> {
        let verifier = self.clone();
        tokio::task::spawn_blocking(move || verifier.hash(plaintext.expose_secret()))
            .await
            .map_err(|e| SecretError::Task(e.to_string()))?
    }

    /// [`SecretVerifier::verify`] on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::Task`] if the blocking task panicked or was
    /// cancelled.
    pub async fn verify_async(
        &self,
        plaintext: SecretString,
        hashed: String,
    ) -> Result<bool, SecretError> {
        let verifier = self.clone();
        tokio::task::spawn_blocking(move || verifier.verify(plaintext.expose_secret(), &hashed))
            .await
            .map_err(|e| SecretError::Task(e.to_string()))
    }
}
