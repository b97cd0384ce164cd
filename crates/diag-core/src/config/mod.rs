//! Configuration: per-section structs, compiled defaults, layered loading.

pub mod cluster_config;
pub mod defaults;
pub mod diag_config;
pub mod download_config;
pub mod observability_config;
pub mod transport_config;

pub use cluster_config::{AuthScheme, ClusterConfig};
pub use diag_config::{CliOverrides, DiagConfig};
pub use download_config::DownloadConfig;
pub use observability_config::ObservabilityConfig;
pub use transport_config::TransportConfig;
