use authn_gate_sdk::PrincipalLookupError;
use sea_orm::{DbErr, SqlErr};

use crate::domain::error::DomainError;

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::database(e.to_string())
}

pub(crate) fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Pool exhaustion and broken connections are transient; everything else is
/// reported as an internal lookup failure.
pub(crate) fn lookup_err(e: DbErr) -> PrincipalLookupError {
    match e {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            PrincipalLookupError::Unavailable(e.to_string())
        }
        other => PrincipalLookupError::Internal(other.to_string()),
    }
}
