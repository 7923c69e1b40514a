//! Domain service layer - business logic and rules.
//!
//! Per-resource submodules:
//! - `users` - registration, profile updates and account removal
//! - `courses` - course CRUD
//!
//! ## Security
//!
//! Handlers pass the [`AuthenticatedContext`](campus_security::AuthenticatedContext)
//! produced by the gate into every mutating call. Mutations run in a fixed
//! order: validate input, load the target (404), check ownership with
//! [`OwnershipAuthorizer`](campus_security::OwnershipAuthorizer) (403), then
//! write. Reads are not ownership-gated.
//!
//! ## Connection Management
//!
//! Services own a `DatabaseConnection` (a pool handle) and hand it, or a
//! transaction opened from it, to repository methods. Handlers never touch
//! database objects.

use std::sync::Arc;

use authn_gate::SecretVerifier;
use sea_orm::DatabaseConnection;

use crate::config::CoursesConfig;
use crate::domain::repos::{CoursesRepository, UsersRepository};

mod courses;
mod users;

pub use courses::CoursesService;
pub use users::UsersService;

/// Configuration for the domain services
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_field_length: usize,
    pub min_password_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        CoursesConfig::default().into()
    }
}

impl From<CoursesConfig> for ServiceConfig {
    fn from(cfg: CoursesConfig) -> Self {
        Self {
            max_field_length: cfg.max_field_length,
            min_password_length: cfg.min_password_length,
        }
    }
}

// DI Container - aggregates all domain services
pub struct AppServices<UR, CR>
where
    UR: UsersRepository + 'static,
    CR: CoursesRepository + 'static,
{
    pub users: UsersService<UR, CR>,
    pub courses: CoursesService<CR>,
}

impl<UR, CR> AppServices<UR, CR>
where
    UR: UsersRepository + 'static,
    CR: CoursesRepository + 'static,
{
    #[must_use]
    pub fn new(
        users_repo: UR,
        courses_repo: CR,
        db: DatabaseConnection,
        verifier: SecretVerifier,
        config: ServiceConfig,
    ) -> Self {
        let users_repo = Arc::new(users_repo);
        let courses_repo = Arc::new(courses_repo);

        Self {
            users: UsersService::new(
                db.clone(),
                users_repo,
                Arc::clone(&courses_repo),
                verifier,
                config.clone(),
            ),
            courses: CoursesService::new(db, courses_repo, config),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests;
