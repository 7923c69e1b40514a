use std::sync::Arc;

use authn_gate::{AuthNGateConfig, AuthNState, SecretError};
use authn_gate_sdk::PrincipalLookup;
use axum::Router;
use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes;
use crate::config::CoursesConfig;
use crate::domain::service::AppServices;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{OrmCoursesRepository, OrmUsersRepository, SeaOrmPrincipalLookup};

/// Type alias for the concrete services with ORM repositories.
pub type ConcreteAppServices = AppServices<OrmUsersRepository, OrmCoursesRepository>;

/// The users/courses module: services plus the gate that protects them.
#[derive(Clone)]
pub struct CoursesModule {
    services: Arc<ConcreteAppServices>,
    authn: AuthNState,
}

impl CoursesModule {
    /// Wire storage, the authentication gate and the domain services over one
    /// database connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError`] if the hashing parameters are invalid.
    pub fn init(
        db: DatabaseConnection,
        cfg: CoursesConfig,
        authn_cfg: &AuthNGateConfig,
    ) -> Result<Self, SecretError> {
        info!("Initializing courses module");

        let lookup: Arc<dyn PrincipalLookup> = Arc::new(SeaOrmPrincipalLookup::new(db.clone()));
        let authn = AuthNState::from_config(authn_cfg, lookup)?;

        // New passwords are hashed with the same parameters the gate verifies with.
        let verifier = authn.gate().verifier().clone();

        let services = Arc::new(AppServices::new(
            OrmUsersRepository::new(),
            OrmCoursesRepository::new(),
            db,
            verifier,
            cfg.into(),
        ));

        Ok(Self { services, authn })
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`DbErr`] if a migration fails.
    pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
        info!("Running courses database migrations");
        Migrator::up(db, None).await
    }

    #[must_use]
    pub fn router(&self) -> Router {
        routes::register_routes(Arc::clone(&self.services), self.authn.clone())
    }

    #[must_use]
    pub fn services(&self) -> &Arc<ConcreteAppServices> {
        &self.services
    }
}
