use campus_security::OwnershipViolation;
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: i64 },

    #[error("Username '{username}' is already taken")]
    UsernameTaken { username: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Forbidden(#[from] OwnershipViolation),

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    #[must_use]
    pub fn user_not_found(id: i64) -> Self {
        Self::NotFound { kind: "user", id }
    }

    #[must_use]
    pub fn course_not_found(id: i64) -> Self {
        Self::NotFound { kind: "course", id }
    }

    pub fn username_taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<authn_gate::SecretError> for DomainError {
    fn from(e: authn_gate::SecretError) -> Self {
        tracing::error!(error = %e, "password hashing failed");
        Self::internal(e.to_string())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::database(e.to_string())
    }
}
