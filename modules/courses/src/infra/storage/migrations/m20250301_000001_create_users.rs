use sea_orm_migration::prelude as mig;

pub struct Migration;

impl mig::MigrationName for Migration {
    fn name(&self) -> &'static str {
        "m20250301_000001_create_users"
    }
}

#[derive(mig::DeriveIden)]
pub(super) enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Username,
    SecretHash,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl mig::MigrationTrait for Migration {
    async fn up(&self, manager: &mig::SchemaManager) -> Result<(), mig::DbErr> {
        manager
            .create_table(
                mig::Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        mig::ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(mig::ColumnDef::new(Users::FirstName).string().not_null())
                    .col(mig::ColumnDef::new(Users::LastName).string().not_null())
                    .col(
                        mig::ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(mig::ColumnDef::new(Users::SecretHash).string().not_null())
                    .col(
                        mig::ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        mig::ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &mig::SchemaManager) -> Result<(), mig::DbErr> {
        manager
            .drop_table(mig::Table::drop().table(Users::Table).to_owned())
            .await
    }
}
