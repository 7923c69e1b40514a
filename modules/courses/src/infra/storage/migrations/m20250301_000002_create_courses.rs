use sea_orm_migration::prelude as mig;

use super::m20250301_000001_create_users::Users;

pub struct Migration;

impl mig::MigrationName for Migration {
    fn name(&self) -> &'static str {
        "m20250301_000002_create_courses"
    }
}

#[derive(mig::DeriveIden)]
enum Courses {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    EstimatedTime,
    MaterialsNeeded,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl mig::MigrationTrait for Migration {
    async fn up(&self, manager: &mig::SchemaManager) -> Result<(), mig::DbErr> {
        manager
            .create_table(
                mig::Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        mig::ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(mig::ColumnDef::new(Courses::OwnerId).big_integer().not_null())
                    .col(mig::ColumnDef::new(Courses::Title).string().not_null())
                    .col(mig::ColumnDef::new(Courses::Description).text().not_null())
                    .col(mig::ColumnDef::new(Courses::EstimatedTime).string().null())
                    .col(mig::ColumnDef::new(Courses::MaterialsNeeded).string().null())
                    .col(
                        mig::ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        mig::ColumnDef::new(Courses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        mig::ForeignKey::create()
                            .name("fk_courses_owner_id")
                            .from(Courses::Table, Courses::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(mig::ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                mig::Index::create()
                    .name("idx_courses_owner_id")
                    .table(Courses::Table)
                    .col(Courses::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &mig::SchemaManager) -> Result<(), mig::DbErr> {
        manager
            .drop_table(mig::Table::drop().table(Courses::Table).to_owned())
            .await
    }
}
