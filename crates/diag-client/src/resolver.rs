//! Base-URL resolution for the diagnostics API.

use diag_core::errors::{DiagError, DiagResult};
use reqwest::Url;

/// Produces the URL every session path is joined onto.
pub trait BaseUrlResolver: Send + Sync {
    fn base_url(&self) -> DiagResult<Url>;
}

/// A base URL fixed at construction.
#[derive(Debug, Clone)]
pub struct FixedUrl(Url);

impl FixedUrl {
    pub fn new(url: Url) -> Self {
        Self(url)
    }

    pub fn parse(input: &str) -> DiagResult<Self> {
        parse_url(input).map(Self)
    }
}

impl BaseUrlResolver for FixedUrl {
    fn base_url(&self) -> DiagResult<Url> {
        Ok(self.0.clone())
    }
}

/// An API path resolved against a cluster root URL.
///
/// An absolute `path` replaces whatever path the cluster URL carries, and
/// the trailing slash on `path` decides whether later joins append to it.
#[derive(Debug, Clone)]
pub struct ClusterPath {
    cluster_url: String,
    path: String,
}

impl ClusterPath {
    pub fn new(cluster_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            cluster_url: cluster_url.into(),
            path: path.into(),
        }
    }
}

impl BaseUrlResolver for ClusterPath {
    fn base_url(&self) -> DiagResult<Url> {
        let root = parse_url(&self.cluster_url)?;
        root.join(&self.path).map_err(|e| DiagError::InvalidUrl {
            input: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

fn parse_url(input: &str) -> DiagResult<Url> {
    Url::parse(input).map_err(|e| DiagError::InvalidUrl {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
