//! Error handling for the diagnostics client.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod diag_error;
pub mod error_code;
pub mod transport_error;

pub use config_error::ConfigError;
pub use diag_error::{DiagError, DiagResult};
pub use error_code::DiagErrorCode;
pub use transport_error::TransportError;
