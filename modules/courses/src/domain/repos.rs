//! Repository ports. Connections are passed per call so that a service can run
//! several repository calls inside one transaction.

use async_trait::async_trait;
use campus_security::PrincipalId;
use sea_orm::ConnectionTrait;

use super::error::DomainError;
use super::models::{Course, User, UserRecord};

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<User>, DomainError>;

    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: PrincipalId,
    ) -> Result<Option<User>, DomainError>;

    async fn username_exists<C: ConnectionTrait>(
        &self,
        conn: &C,
        username: &str,
    ) -> Result<bool, DomainError>;

    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        record: UserRecord,
    ) -> Result<User, DomainError>;

    /// Persist the profile fields of `user`; replaces the hash when given.
    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        user: User,
        secret_hash: Option<String>,
    ) -> Result<User, DomainError>;

    async fn delete<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: PrincipalId,
    ) -> Result<bool, DomainError>;
}

#[async_trait]
pub trait CoursesRepository: Send + Sync {
    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<Course>, DomainError>;

    async fn get<C: ConnectionTrait>(&self, conn: &C, id: i64)
    -> Result<Option<Course>, DomainError>;

    /// Insert a course; `id` and timestamps on the input are ignored.
    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        course: Course,
    ) -> Result<Course, DomainError>;

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        course: Course,
    ) -> Result<Course, DomainError>;

    async fn delete<C: ConnectionTrait>(&self, conn: &C, id: i64) -> Result<bool, DomainError>;

    async fn delete_by_owner<C: ConnectionTrait>(
        &self,
        conn: &C,
        owner_id: PrincipalId,
    ) -> Result<u64, DomainError>;
}
