//! Shared utilities for snipstash.
//!
//! This crate provides common utilities used across the snipstash workspace:
//! - ULID-based identifier generation for snippets and files
//! - Logging setup with tracing
//! - Platform directory resolution

pub mod id;
pub mod log;
pub mod path;

pub use id::{IdPrefix, Identifier};
pub use log::{LogConfig, LogLevel};
