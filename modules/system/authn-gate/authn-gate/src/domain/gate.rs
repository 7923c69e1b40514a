//! The authentication gate.

use std::sync::Arc;

use authn_gate_sdk::{GateDecision, GateFault, PrincipalLookup, Rejection};
use campus_security::AuthenticatedContext;
use http::HeaderValue;
use secrecy::SecretString;

use super::credential::{CredentialExtractor, ExtractError};
use super::error::SecretError;
use super::resolver::PrincipalResolver;
use super::secret::SecretVerifier;

/// Verified against when the identifier is unknown, so both rejection paths
/// cost one Argon2 verification.
const DECOY_SECRET: &str = "campus-authn-gate-decoy";

/// Stateless per-request authentication.
///
/// States: no header -> `MissingCredential`; unparsable header ->
/// `MalformedCredential`; unknown identifier -> `UnknownPrincipal`; wrong
/// secret -> `SecretMismatch`; otherwise `Authenticated`. Absent and malformed
/// headers are rejected before any lookup happens.
pub struct AuthenticationGate {
    resolver: PrincipalResolver,
    verifier: SecretVerifier,
    decoy_hash: String,
}

impl AuthenticationGate {
    /// Create a gate over the given lookup port.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError`] if the decoy hash cannot be computed.
    pub fn new(
        lookup: Arc<dyn PrincipalLookup>,
        verifier: SecretVerifier,
    ) -> Result<Self, SecretError> {
        let decoy_hash = verifier.hash(DECOY_SECRET)?;
        Ok(Self {
            resolver: PrincipalResolver::new(lookup),
            verifier,
            decoy_hash,
        })
    }

    /// The verifier this gate checks secrets with.
    #[must_use]
    pub fn verifier(&self) -> &SecretVerifier {
        &self.verifier
    }

    /// Run the gate on a raw `Authorization` header value.
    ///
    /// Rejections are returned as [`GateDecision::Rejected`]; only failures of
    /// the lookup port or the hashing task are errors.
    ///
    /// # Errors
    ///
    /// - [`GateFault::Lookup`] if the principal store fails
    /// - [`GateFault::Hashing`] if secret verification could not run
    #[tracing::instrument(skip_all)]
    pub async fn authenticate(
        &self,
        authorization: Option<&HeaderValue>,
    ) -> Result<GateDecision, GateFault> {
        let credential = match CredentialExtractor::extract(authorization) {
            Ok(credential) => credential,
            Err(ExtractError::Absent) => return Ok(reject(Rejection::MissingCredential, "")),
            Err(ExtractError::Malformed(detail)) => {
                return Ok(reject(Rejection::MalformedCredential, detail));
            }
        };

        let (identifier, secret) = credential.into_parts();

        let Some(principal) = self.resolver.resolve(&identifier).await? else {
            // Burn the same work as a real verification before answering.
            self.verify(secret, self.decoy_hash.clone()).await?;
            return Ok(reject(Rejection::UnknownPrincipal, ""));
        };

        if !self
            .verify(secret, principal.secret_hash().to_owned())
            .await?
        {
            return Ok(reject(Rejection::SecretMismatch, ""));
        }

        tracing::debug!(principal.id = %principal.id(), "request authenticated");
        Ok(GateDecision::Authenticated(AuthenticatedContext::new(principal)))
    }

    async fn verify(&self, secret: SecretString, hashed: String) -> Result<bool, GateFault> {
        self.verifier
            .verify_async(secret, hashed)
            .await
            .map_err(|e| GateFault::Hashing(e.to_string()))
    }
}

fn reject(rejection: Rejection, detail: &'static str) -> GateDecision {
    tracing::debug!(reason = %rejection, detail, "AuthN rejected");
    GateDecision::Rejected(rejection)
}
