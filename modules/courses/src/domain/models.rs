//! Domain models for users and courses.

use campus_security::{OwnedResource, PrincipalId};
use secrecy::SecretString;
use time::OffsetDateTime;

/// A registered user. The stored secret hash never leaves the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: PrincipalId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A user owns its own record.
impl OwnedResource for User {
    const KIND: &'static str = "user";

    fn owner_id(&self) -> PrincipalId {
        self.id
    }
}

/// Registration data.
#[derive(Debug)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: SecretString,
}

/// Full replacement of a user's profile. `password: None` keeps the current one.
#[derive(Debug)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: Option<SecretString>,
}

/// Insert payload handed to the repository once the password is hashed.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub secret_hash: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub owner_id: PrincipalId,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl OwnedResource for Course {
    const KIND: &'static str = "course";

    fn owner_id(&self) -> PrincipalId {
        self.owner_id
    }
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

/// Full replacement of a course's editable fields. The owner never changes.
#[derive(Debug, Clone)]
pub struct CourseUpdate {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}
