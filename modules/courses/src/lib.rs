//! Courses Module
//!
//! Users and the courses they own, behind the `authn_gate` HTTP Basic gate.
//!
//! ## Architecture
//!
//! ### API Layer (`courses::api`)
//! - `rest/routes.rs` - public and gated route sets
//! - `rest/handlers/` - request handlers per resource
//! - `rest/dto.rs` - REST DTOs (camelCase JSON)
//! - `rest/error.rs` - domain errors to RFC 9457 problems
//!
//! ### Domain Layer (`courses::domain`)
//! - `service/` - business operations per resource, ownership checks
//! - `repos.rs` - repository ports
//! - `error.rs` - domain error type
//! - **Rule:** MUST NOT import `api::*`
//!
//! ### Infrastructure Layer (`courses::infra`)
//! - `storage/entity/` - `SeaORM` entities
//! - `storage/migrations/` - schema migrations
//! - `storage/principal_lookup.rs` - the gate's `PrincipalLookup` port over `users`
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod module;
pub use module::{ConcreteAppServices, CoursesModule};

pub mod config;
pub use config::CoursesConfig;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

#[cfg(test)]
mod test_support;
