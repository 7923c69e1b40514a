#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Shared HTTP plumbing for Campus modules.

pub mod problem;

pub use problem::{APPLICATION_PROBLEM_JSON, ApiResult, Problem};
