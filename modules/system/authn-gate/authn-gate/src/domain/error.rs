//! Domain errors for the authentication gate.

/// Failures of the secret hashing machinery.
#[derive(thiserror::Error, Debug)]
pub enum SecretError {
    #[error("invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("failed to hash secret: {0}")]
    Hashing(String),

    #[error("hashing task did not complete: {0}")]
    Task(String),
}
