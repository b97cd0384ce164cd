//! # diag-core
//!
//! Foundation crate for the diagnostics-bundle client.
//! Defines the error taxonomy, layered configuration, and tracing setup.
//! The client and CLI crates depend on this.

pub mod config;
pub mod errors;
pub mod tracing_setup;

pub use config::DiagConfig;
pub use errors::{DiagError, DiagErrorCode, DiagResult};
