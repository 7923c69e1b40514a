use campus_http::Problem;

use crate::domain::error::DomainError;

/// Map domain error to RFC9457 Problem
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::NotFound { kind, id } => {
            Problem::not_found(format!("{kind} with id {id} was not found"))
        }
        DomainError::UsernameTaken { username } => {
            Problem::conflict(format!("Username '{username}' is already in use"))
        }
        DomainError::Validation { field, message } => {
            Problem::bad_request(format!("{field}: {message}")).with_field(field.clone())
        }
        DomainError::Forbidden(violation) => {
            tracing::debug!(error = %violation, "ownership check failed");
            Problem::forbidden(violation.to_string())
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            Problem::internal("An internal database error occurred")
        }
        DomainError::Internal(_) => {
            tracing::error!(error = ?e, "Internal error occurred");
            Problem::internal("An internal error occurred")
        }
    };

    if instance.is_empty() {
        problem
    } else {
        problem.with_instance(instance)
    }
}

/// Implement Into<Problem> for `DomainError` so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use campus_security::{OwnershipViolation, PrincipalId};
    use http::StatusCode;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn status_codes() {
        let cases = [
            (DomainError::course_not_found(1), StatusCode::NOT_FOUND),
            (DomainError::username_taken("alice"), StatusCode::CONFLICT),
            (DomainError::validation("title", "must not be empty"), StatusCode::BAD_REQUEST),
            (DomainError::database("disk I/O error"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                DomainError::Forbidden(OwnershipViolation {
                    kind: "course",
                    owner_id: PrincipalId::new(9),
                    principal_id: PrincipalId::new(7),
                }),
                StatusCode::FORBIDDEN,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(Problem::from(err).status_code(), status);
        }
    }

    #[test]
    #[traced_test]
    fn ownership_violation_is_reported_and_logged() {
        let problem = Problem::from(DomainError::Forbidden(OwnershipViolation {
            kind: "course",
            owner_id: PrincipalId::new(9),
            principal_id: PrincipalId::new(7),
        }));

        assert_eq!(problem.status_code(), StatusCode::FORBIDDEN);
        assert!(problem.detail.contains("course is owned by principal 9"));
        assert!(logs_contain("ownership check failed"));
    }

    #[test]
    fn database_details_are_not_exposed() {
        let problem = Problem::from(DomainError::database("UNIQUE constraint failed: secret"));
        assert!(!problem.detail.contains("UNIQUE"));
    }

    #[test]
    fn validation_names_the_field() {
        let problem = domain_error_to_problem(
            &DomainError::validation("title", "must not be empty"),
            "/api/courses",
        );
        assert_eq!(problem.field.as_deref(), Some("title"));
        assert_eq!(problem.instance.as_deref(), Some("/api/courses"));
    }
}
