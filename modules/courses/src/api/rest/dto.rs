use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::models::{Course, CourseUpdate, NewCourse, NewUser, User, UserUpdate};

/// REST DTO for user representation. Never carries credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// REST DTO for creating a new user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserReq {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: SecretString,
}

/// REST DTO for replacing a user's profile
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserReq {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    #[serde(default)]
    pub password: Option<SecretString>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Body of both `POST /api/courses` and `PUT /api/courses/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CourseReq {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub materials_needed: Option<String>,
}

// Conversion implementations between REST DTOs and domain models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            username: req.username,
            password: req.password,
        }
    }
}

impl From<UpdateUserReq> for UserUpdate {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            username: req.username,
            password: req.password,
        }
    }
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            owner_id: course.owner_id.get(),
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

impl From<CourseReq> for NewCourse {
    fn from(req: CourseReq) -> Self {
        Self {
            title: req.title,
            description: req.description,
            estimated_time: req.estimated_time,
            materials_needed: req.materials_needed,
        }
    }
}

impl From<CourseReq> for CourseUpdate {
    fn from(req: CourseReq) -> Self {
        Self {
            title: req.title,
            description: req.description,
            estimated_time: req.estimated_time,
            materials_needed: req.materials_needed,
        }
    }
}
