use std::sync::Arc;

use authn_gate::SecretVerifier;
use campus_security::{AuthenticatedContext, OwnershipAuthorizer, PrincipalId};
use sea_orm::{DatabaseConnection, TransactionTrait};
use time::OffsetDateTime;
use tracing::instrument;

use crate::domain::error::DomainError;
use crate::domain::models::{NewUser, User, UserRecord, UserUpdate};
use crate::domain::repos::{CoursesRepository, UsersRepository};
use crate::domain::service::ServiceConfig;
use crate::domain::validation::{self, fields};

/// Users service.
///
/// Owns registration (the only public mutation) and the ownership-gated
/// profile operations. Passwords are hashed here, before they reach storage.
pub struct UsersService<R: UsersRepository + 'static, CR: CoursesRepository + 'static> {
    db: DatabaseConnection,
    repo: Arc<R>,
    courses: Arc<CR>,
    verifier: SecretVerifier,
    config: ServiceConfig,
}

impl<R: UsersRepository + 'static, CR: CoursesRepository + 'static> UsersService<R, CR> {
    #[must_use]
    pub fn new(
        db: DatabaseConnection,
        repo: Arc<R>,
        courses: Arc<CR>,
        verifier: SecretVerifier,
        config: ServiceConfig,
    ) -> Self {
        Self {
            db,
            repo,
            courses,
            verifier,
            config,
        }
    }
}

// Business logic methods
impl<R: UsersRepository + 'static, CR: CoursesRepository + 'static> UsersService<R, CR> {
    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        tracing::debug!("Listing users");

        let users = self.repo.list(&self.db).await?;

        tracing::debug!("Successfully listed {} users", users.len());
        Ok(users)
    }

    /// The authenticated principal's own record.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if the account was removed after the
    /// request was authenticated.
    #[instrument(skip_all, fields(principal.id = %ctx.principal_id()))]
    pub async fn current_user(&self, ctx: &AuthenticatedContext) -> Result<User, DomainError> {
        let id = ctx.principal_id();
        self.repo
            .get(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id.get()))
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// - [`DomainError::Validation`] for invalid input
    /// - [`DomainError::UsernameTaken`] if the username is in use
    #[instrument(skip(self, new_user), fields(username = %new_user.username))]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        tracing::info!("Creating new user");

        self.validate_profile(&new_user.first_name, &new_user.last_name, &new_user.username)?;
        validation::password(&new_user.password, self.config.min_password_length)?;

        let NewUser {
            first_name,
            last_name,
            username,
            password,
        } = new_user;

        if self.repo.username_exists(&self.db, &username).await? {
            return Err(DomainError::username_taken(username));
        }

        let secret_hash = self.verifier.hash_async(password).await?;

        let record = UserRecord {
            first_name,
            last_name,
            username,
            secret_hash,
            created_at: OffsetDateTime::now_utc(),
        };
        let created = self.repo.create(&self.db, record).await?;

        tracing::info!("Successfully created user with id={}", created.id);
        Ok(created)
    }

    /// Replace the profile of an existing user.
    ///
    /// # Errors
    ///
    /// - [`DomainError::Validation`] for invalid input
    /// - [`DomainError::NotFound`] if the user does not exist
    /// - [`DomainError::Forbidden`] unless the caller is that user
    /// - [`DomainError::UsernameTaken`] if the new username is in use
    #[instrument(
        skip(self, ctx, update),
        fields(user_id = %id, principal.id = %ctx.principal_id())
    )]
    pub async fn update_user(
        &self,
        ctx: &AuthenticatedContext,
        id: PrincipalId,
        update: UserUpdate,
    ) -> Result<User, DomainError> {
        tracing::info!("Updating user");

        self.validate_profile(&update.first_name, &update.last_name, &update.username)?;
        if let Some(ref password) = update.password {
            validation::password(password, self.config.min_password_length)?;
        }

        let mut current = self
            .repo
            .get(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id.get()))?;

        OwnershipAuthorizer::ensure_owner(ctx, &current)?;

        if update.username != current.username
            && self.repo.username_exists(&self.db, &update.username).await?
        {
            return Err(DomainError::username_taken(update.username));
        }

        let secret_hash = match update.password {
            Some(password) => Some(self.verifier.hash_async(password).await?),
            None => None,
        };

        current.first_name = update.first_name;
        current.last_name = update.last_name;
        current.username = update.username;
        current.updated_at = OffsetDateTime::now_utc();

        let updated = self.repo.update(&self.db, current, secret_hash).await?;

        tracing::info!("Successfully updated user");
        Ok(updated)
    }

    /// Delete a user together with every course it owns.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NotFound`] if the user does not exist
    /// - [`DomainError::Forbidden`] unless the caller is that user
    #[instrument(skip(self, ctx), fields(user_id = %id, principal.id = %ctx.principal_id()))]
    pub async fn delete_user(
        &self,
        ctx: &AuthenticatedContext,
        id: PrincipalId,
    ) -> Result<(), DomainError> {
        tracing::info!("Deleting user");

        let current = self
            .repo
            .get(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id.get()))?;

        OwnershipAuthorizer::ensure_owner(ctx, &current)?;

        let txn = self.db.begin().await?;
        let removed_courses = self.courses.delete_by_owner(&txn, id).await?;
        if !self.repo.delete(&txn, id).await? {
            return Err(DomainError::user_not_found(id.get()));
        }
        txn.commit().await?;

        tracing::info!(removed_courses, "Successfully deleted user");
        Ok(())
    }

    fn validate_profile(
        &self,
        first_name: &str,
        last_name: &str,
        username: &str,
    ) -> Result<(), DomainError> {
        let max = self.config.max_field_length;
        validation::required_text(fields::FIRST_NAME, first_name, max)?;
        validation::required_text(fields::LAST_NAME, last_name, max)?;
        validation::username(username, max)
    }
}
