//! Shared utilities, configuration, and error handling for Dishpatch
//!
//! This crate provides common functionality used across the Dishpatch application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Password hashing utilities
//! - Custom axum extractors

pub mod config;
pub mod crypto;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use crypto::{hash_password, verify_password};
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
