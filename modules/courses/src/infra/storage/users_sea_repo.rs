use async_trait::async_trait;
use campus_security::PrincipalId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::error::DomainError;
use crate::domain::models::{User, UserRecord};
use crate::domain::repos::UsersRepository;
use crate::infra::storage::db::{db_err, is_unique_violation};
use crate::infra::storage::entity::user::{ActiveModel as UserAM, Column, Entity as UserEntity};

/// ORM-based implementation of the `UsersRepository` trait.
#[derive(Clone, Default)]
pub struct OrmUsersRepository;

impl OrmUsersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UsersRepository for OrmUsersRepository {
    async fn list<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<User>, DomainError> {
        let rows = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: PrincipalId,
    ) -> Result<Option<User>, DomainError> {
        let found = UserEntity::find_by_id(id.get())
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn username_exists<C: ConnectionTrait>(
        &self,
        conn: &C,
        username: &str,
    ) -> Result<bool, DomainError> {
        let count = UserEntity::find()
            .filter(Column::Username.eq(username))
            .count(conn)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        record: UserRecord,
    ) -> Result<User, DomainError> {
        let username = record.username.clone();
        let m = UserAM {
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            username: Set(record.username),
            secret_hash: Set(record.secret_hash),
            created_at: Set(record.created_at),
            updated_at: Set(record.created_at),
            ..Default::default()
        };

        // A concurrent registration can win the race past the service's
        // existence check; the unique index is the final word.
        let inserted = m.insert(conn).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::username_taken(username)
            } else {
                db_err(e)
            }
        })?;
        Ok(inserted.into())
    }

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        user: User,
        secret_hash: Option<String>,
    ) -> Result<User, DomainError> {
        let username = user.username.clone();
        let mut m = UserAM {
            id: Set(user.id.get()),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            username: Set(user.username),
            updated_at: Set(user.updated_at),
            ..Default::default()
        };
        if let Some(hash) = secret_hash {
            m.secret_hash = Set(hash);
        }

        let updated = m.update(conn).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::username_taken(username)
            } else {
                db_err(e)
            }
        })?;
        Ok(updated.into())
    }

    async fn delete<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: PrincipalId,
    ) -> Result<bool, DomainError> {
        let result = UserEntity::delete_by_id(id.get())
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
