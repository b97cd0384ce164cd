//! Stable error codes, printed by the CLI and usable for log filtering.

pub trait DiagErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const TRANSPORT_REQUEST_FAILED: &str = "TRANSPORT_REQUEST_FAILED";
pub const TRANSPORT_TIMEOUT: &str = "TRANSPORT_TIMEOUT";
pub const TRANSPORT_BODY_READ: &str = "TRANSPORT_BODY_READ";
pub const TRANSPORT_CLIENT_BUILD: &str = "TRANSPORT_CLIENT_BUILD";

pub const HTTP_STATUS: &str = "HTTP_STATUS";
pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";
pub const PRECONDITION_FAILED: &str = "PRECONDITION_FAILED";
pub const INVALID_URL: &str = "INVALID_URL";
pub const ENCODE_FAILED: &str = "ENCODE_FAILED";
pub const AUTH_FAILED: &str = "AUTH_FAILED";
pub const IO_FAILED: &str = "IO_FAILED";

pub const CONFIG_FILE_NOT_FOUND: &str = "CONFIG_FILE_NOT_FOUND";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const CONFIG_MISSING: &str = "CONFIG_MISSING";
