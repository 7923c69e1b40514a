use sea_orm_migration::prelude as mig;

mod m20250301_000001_create_users;
mod m20250301_000002_create_courses;

pub struct Migrator;

#[async_trait::async_trait]
impl mig::MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn mig::MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_courses::Migration),
        ]
    }
}
