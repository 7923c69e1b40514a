//! REST surface: DTOs, handlers, routes and the domain error to problem mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
