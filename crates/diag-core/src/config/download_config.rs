use serde::{Deserialize, Serialize};

use super::defaults;

/// Bundle download configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Size of each buffered write to the destination file, in bytes.
    pub chunk_size: usize,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
        }
    }
}
