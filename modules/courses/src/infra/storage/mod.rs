//! `SeaORM` persistence for users and courses.

pub mod courses_sea_repo;
pub(crate) mod db;
pub mod entity;
mod mapper;
pub mod migrations;
pub mod principal_lookup;
pub mod users_sea_repo;

pub use courses_sea_repo::OrmCoursesRepository;
pub use principal_lookup::SeaOrmPrincipalLookup;
pub use users_sea_repo::OrmUsersRepository;
