use secrecy::{ExposeSecret, SecretString};

/// A claimed identifier/secret pair taken from a single request.
///
/// Lives only for the duration of the request that carried it. The secret is
/// wrapped in `SecretString`, so `Debug` never prints it.
#[derive(Debug, Clone)]
pub struct Credential {
    identifier: String,
    secret: SecretString,
}

impl Credential {
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<SecretString>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Plaintext secret, only for handing to the verifier.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }

    /// Split into parts so the secret can move into a blocking task.
    #[must_use]
    pub fn into_parts(self) -> (String, SecretString) {
        (self.identifier, self.secret)
    }
}
