pub mod error;
pub mod models;
pub mod repos;
pub mod service;
pub(crate) mod validation;
