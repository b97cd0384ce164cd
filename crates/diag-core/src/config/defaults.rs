// Single source of truth for all default values.

// --- Cluster ---
pub const DEFAULT_DIAGNOSTICS_PATH: &str = "/system/health/v1/report/diagnostics/";
pub const DEFAULT_TOKEN_ENV: &str = "DCOS_ACS_TOKEN";
pub const CLUSTER_URL_ENV: &str = "DCOS_URL";

// --- Transport ---
pub const DEFAULT_SSL_VERIFY: bool = true;
pub const SSL_VERIFY_ENV: &str = "DIAG_SSL_VERIFY";
pub const DEFAULT_USER_AGENT: &str = concat!("diag-bundle/", env!("CARGO_PKG_VERSION"));

// --- Download ---
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// --- Files ---
pub const DEFAULT_CONFIG_FILENAME: &str = "diag.toml";
