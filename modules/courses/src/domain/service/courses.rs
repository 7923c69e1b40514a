use std::sync::Arc;

use campus_security::{AuthenticatedContext, OwnershipAuthorizer};
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;
use tracing::instrument;

use crate::domain::error::DomainError;
use crate::domain::models::{Course, CourseUpdate, NewCourse};
use crate::domain::repos::CoursesRepository;
use crate::domain::service::ServiceConfig;
use crate::domain::validation::{self, fields};

/// Courses service. Reads are public; writes require ownership.
pub struct CoursesService<R: CoursesRepository + 'static> {
    db: DatabaseConnection,
    repo: Arc<R>,
    config: ServiceConfig,
}

impl<R: CoursesRepository + 'static> CoursesService<R> {
    #[must_use]
    pub fn new(db: DatabaseConnection, repo: Arc<R>, config: ServiceConfig) -> Self {
        Self { db, repo, config }
    }

    /// # Errors
    ///
    /// Returns [`DomainError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn list_courses(&self) -> Result<Vec<Course>, DomainError> {
        let courses = self.repo.list(&self.db).await?;
        tracing::debug!("Successfully listed {} courses", courses.len());
        Ok(courses)
    }

    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if the course does not exist.
    #[instrument(skip(self), fields(course_id = %id))]
    pub async fn get_course(&self, id: i64) -> Result<Course, DomainError> {
        self.repo
            .get(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::course_not_found(id))
    }

    /// Create a course owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for invalid input.
    #[instrument(skip(self, ctx, new_course), fields(principal.id = %ctx.principal_id()))]
    pub async fn create_course(
        &self,
        ctx: &AuthenticatedContext,
        new_course: NewCourse,
    ) -> Result<Course, DomainError> {
        tracing::info!("Creating new course");

        self.validate(
            &new_course.title,
            &new_course.description,
            new_course.estimated_time.as_deref(),
            new_course.materials_needed.as_deref(),
        )?;

        let now = OffsetDateTime::now_utc();
        let course = Course {
            id: 0,
            owner_id: ctx.principal_id(),
            title: new_course.title,
            description: new_course.description,
            estimated_time: new_course.estimated_time,
            materials_needed: new_course.materials_needed,
            created_at: now,
            updated_at: now,
        };
        let created = self.repo.create(&self.db, course).await?;

        tracing::info!("Successfully created course with id={}", created.id);
        Ok(created)
    }

    /// # Errors
    ///
    /// - [`DomainError::Validation`] for invalid input
    /// - [`DomainError::NotFound`] if the course does not exist
    /// - [`DomainError::Forbidden`] unless the caller owns the course
    #[instrument(
        skip(self, ctx, update),
        fields(course_id = %id, principal.id = %ctx.principal_id())
    )]
    pub async fn update_course(
        &self,
        ctx: &AuthenticatedContext,
        id: i64,
        update: CourseUpdate,
    ) -> Result<Course, DomainError> {
        tracing::info!("Updating course");

        self.validate(
            &update.title,
            &update.description,
            update.estimated_time.as_deref(),
            update.materials_needed.as_deref(),
        )?;

        let mut current = self.get_course(id).await?;

        OwnershipAuthorizer::ensure_owner(ctx, &current)?;

        current.title = update.title;
        current.description = update.description;
        current.estimated_time = update.estimated_time;
        current.materials_needed = update.materials_needed;
        current.updated_at = OffsetDateTime::now_utc();

        let updated = self.repo.update(&self.db, current).await?;

        tracing::info!("Successfully updated course");
        Ok(updated)
    }

    /// # Errors
    ///
    /// - [`DomainError::NotFound`] if the course does not exist
    /// - [`DomainError::Forbidden`] unless the caller owns the course
    #[instrument(skip(self, ctx), fields(course_id = %id, principal.id = %ctx.principal_id()))]
    pub async fn delete_course(
        &self,
        ctx: &AuthenticatedContext,
        id: i64,
    ) -> Result<(), DomainError> {
        tracing::info!("Deleting course");

        let current = self.get_course(id).await?;

        OwnershipAuthorizer::ensure_owner(ctx, &current)?;

        if !self.repo.delete(&self.db, id).await? {
            return Err(DomainError::course_not_found(id));
        }

        tracing::info!("Successfully deleted course");
        Ok(())
    }

    fn validate(
        &self,
        title: &str,
        description: &str,
        estimated_time: Option<&str>,
        materials_needed: Option<&str>,
    ) -> Result<(), DomainError> {
        let max = self.config.max_field_length;
        validation::required_text(fields::TITLE, title, max)?;
        // Descriptions are free-form text with no upper bound.
        validation::required_text(fields::DESCRIPTION, description, usize::MAX)?;
        validation::optional_text(fields::ESTIMATED_TIME, estimated_time, max)?;
        validation::optional_text(fields::MATERIALS_NEEDED, materials_needed, max)
    }
}
