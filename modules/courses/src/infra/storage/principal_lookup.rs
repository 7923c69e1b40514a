use async_trait::async_trait;
use authn_gate_sdk::{PrincipalLookup, PrincipalLookupError};
use campus_security::Principal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::infra::storage::db::lookup_err;
use crate::infra::storage::entity::user::{Column, Entity as UserEntity};

/// Serves the gate's principal lookups from the `users` table.
///
/// Identifiers are usernames, matched exactly (case-sensitive).
#[derive(Clone)]
pub struct SeaOrmPrincipalLookup {
    db: DatabaseConnection,
}

impl SeaOrmPrincipalLookup {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PrincipalLookup for SeaOrmPrincipalLookup {
    async fn find_principal_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Principal>, PrincipalLookupError> {
        let found = UserEntity::find()
            .filter(Column::Username.eq(identifier))
            .one(&self.db)
            .await
            .map_err(lookup_err)?;
        Ok(found.map(Into::into))
    }
}
