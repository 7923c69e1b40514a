#![allow(clippy::unwrap_used, clippy::expect_used)]

use authn_gate::{HashingConfig, SecretVerifier};
use campus_security::{AuthenticatedContext, Principal};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use secrecy::SecretString;

use crate::domain::models::{NewCourse, NewUser, User};
use crate::domain::service::{AppServices, ServiceConfig};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{OrmCoursesRepository, OrmUsersRepository};
use crate::module::ConcreteAppServices;

/// Create an in-memory database with migrations applied.
///
/// A single pooled connection, since every `sqlite::memory:` connection is
/// its own database.
pub async fn inmem_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

#[must_use]
pub fn fast_verifier() -> SecretVerifier {
    SecretVerifier::from_config(&HashingConfig::insecure_fast()).unwrap()
}

pub fn build_services(db: DatabaseConnection) -> ConcreteAppServices {
    AppServices::new(
        OrmUsersRepository::new(),
        OrmCoursesRepository::new(),
        db,
        fast_verifier(),
        ServiceConfig::default(),
    )
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        first_name: "Test".to_owned(),
        last_name: username.to_owned(),
        username: username.to_owned(),
        password: SecretString::from("correct-secret".to_owned()),
    }
}

pub fn new_course(title: &str) -> NewCourse {
    NewCourse {
        title: title.to_owned(),
        description: "A course".to_owned(),
        estimated_time: Some("2 hours".to_owned()),
        materials_needed: None,
    }
}

pub async fn seed_user(svc: &ConcreteAppServices, username: &str) -> User {
    svc.users.create_user(new_user(username)).await.unwrap()
}

/// What the gate would produce for `user` after a successful login.
pub fn ctx_for(user: &User) -> AuthenticatedContext {
    AuthenticatedContext::new(Principal::new(user.id, user.username.clone(), "unused"))
}
