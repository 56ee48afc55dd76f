//! # am-core
//!
//! Core utilities, configuration, and error handling for the access
//! management lifecycle services.
//!
//! This crate provides foundational types used across the other `am-*`
//! crates: the service configuration, the bootstrap error type and the
//! tracing subscriber setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::ServiceConfig;
pub use error::{Error, Result};
