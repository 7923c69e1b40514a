use async_trait::async_trait;
use campus_security::PrincipalId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::error::DomainError;
use crate::domain::models::Course;
use crate::domain::repos::CoursesRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::course::{
    ActiveModel as CourseAM, Column, Entity as CourseEntity,
};

/// ORM-based implementation of the `CoursesRepository` trait.
#[derive(Clone, Default)]
pub struct OrmCoursesRepository;

impl OrmCoursesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CoursesRepository for OrmCoursesRepository {
    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<Course>, DomainError> {
        let rows = CourseEntity::find()
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<Course>, DomainError> {
        let found = CourseEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        course: Course,
    ) -> Result<Course, DomainError> {
        let m = CourseAM {
            owner_id: Set(course.owner_id.get()),
            title: Set(course.title),
            description: Set(course.description),
            estimated_time: Set(course.estimated_time),
            materials_needed: Set(course.materials_needed),
            created_at: Set(course.created_at),
            updated_at: Set(course.updated_at),
            ..Default::default()
        };

        let inserted = m.insert(conn).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        course: Course,
    ) -> Result<Course, DomainError> {
        let m = CourseAM {
            id: Set(course.id),
            title: Set(course.title),
            description: Set(course.description),
            estimated_time: Set(course.estimated_time),
            materials_needed: Set(course.materials_needed),
            updated_at: Set(course.updated_at),
            ..Default::default()
        };

        let updated = m.update(conn).await.map_err(db_err)?;
        Ok(updated.into())
    }

    async fn delete<C: ConnectionTrait>(&self, conn: &C, id: i64) -> Result<bool, DomainError> {
        let result = CourseEntity::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_owner<C: ConnectionTrait>(
        &self,
        conn: &C,
        owner_id: PrincipalId,
    ) -> Result<u64, DomainError> {
        let result = CourseEntity::delete_many()
            .filter(Column::OwnerId.eq(owner_id.get()))
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
