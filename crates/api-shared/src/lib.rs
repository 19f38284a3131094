//! # API Shared
//!
//! Shared utilities and definitions for Cura APIs.
//!
//! Contains:
//! - Request/response wire types (`models` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the workspace server binary.

pub mod health;
pub mod models;

pub use health::HealthService;
pub use models::*;
