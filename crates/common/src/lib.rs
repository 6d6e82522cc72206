//! Shared utilities, configuration, and error handling for Cerebrum
//!
//! This crate provides common functionality used across the service:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Repository error types shared by every store
//! - Request extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{Config, StoreBackend};
pub use db::{unique_violation, RepositoryError, StoreResult};
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
