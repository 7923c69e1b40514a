//! Entity to domain model conversions.

use campus_security::{Principal, PrincipalId};

use crate::domain::models::{Course, User};

use super::entity::{course, user};

impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: PrincipalId::new(m.id),
            first_name: m.first_name,
            last_name: m.last_name,
            username: m.username,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<user::Model> for Principal {
    fn from(m: user::Model) -> Self {
        Principal::new(m.id, m.username, m.secret_hash)
    }
}

impl From<course::Model> for Course {
    fn from(m: course::Model) -> Self {
        Self {
            id: m.id,
            owner_id: PrincipalId::new(m.owner_id),
            title: m.title,
            description: m.description,
            estimated_time: m.estimated_time,
            materials_needed: m.materials_needed,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
