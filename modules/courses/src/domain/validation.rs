//! Input rules shared by the users and courses services.

use secrecy::{ExposeSecret, SecretString};

use super::error::DomainError;

/// Field names as they appear in the REST payloads.
pub(crate) mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const ESTIMATED_TIME: &str = "estimatedTime";
    pub const MATERIALS_NEEDED: &str = "materialsNeeded";
}

/// Non-empty after trimming and at most `max` characters.
pub(crate) fn required_text(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    bounded_text(field, value, max)
}

pub(crate) fn bounded_text(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len > max {
        return Err(DomainError::validation(
            field,
            format!("too long: {len} characters (max: {max})"),
        ));
    }
    Ok(())
}

pub(crate) fn optional_text(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Result<(), DomainError> {
    value.map_or(Ok(()), |v| bounded_text(field, v, max))
}

/// Usernames double as the credential identifier, which is split off the
/// Basic payload at the first `:`.
pub(crate) fn username(value: &str, max: usize) -> Result<(), DomainError> {
    required_text(fields::USERNAME, value, max)?;
    if value.contains(':') {
        return Err(DomainError::validation(fields::USERNAME, "must not contain ':'"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(DomainError::validation(
            fields::USERNAME,
            "must not contain whitespace",
        ));
    }
    Ok(())
}

pub(crate) fn password(value: &SecretString, min: usize) -> Result<(), DomainError> {
    if value.expose_secret().chars().count() < min {
        return Err(DomainError::validation(
            fields::PASSWORD,
            format!("must be at least {min} characters"),
        ));
    }
    Ok(())
}
