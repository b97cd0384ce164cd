//! Diagnostics bundles: create new ones, enumerate existing ones.

pub mod bundle;
pub mod listing;

use std::iter::FusedIterator;

use diag_core::errors::{DiagError, DiagResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collection::Collection;
use crate::session::{RequestOptions, Session};

pub use bundle::Bundle;
pub use listing::{basename, flatten_listing, BundleDescriptor};

/// Endpoint that starts bundle generation.
const CREATE_PATH: &str = "create";

/// Which cluster nodes a new bundle should cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSelector {
    pub nodes: Vec<String>,
}

impl NodeSelector {
    /// Every node in the cluster.
    pub fn all() -> Self {
        Self {
            nodes: vec!["all".to_string()],
        }
    }

    /// An explicit set of node identifiers.
    pub fn nodes<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for NodeSelector {
    fn default() -> Self {
        Self::all()
    }
}

/// Stateless view of the bundles reachable through a session.
#[derive(Debug, Clone, Copy)]
pub struct BundleCollection<'s> {
    session: &'s Session,
}

impl<'s> BundleCollection<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self { session }
    }

    /// Every bundle currently listed, across all nodes.
    ///
    /// The listing is fetched once; the returned iterator walks it in
    /// node order, then in each node's list order.
    pub fn all(&self) -> DiagResult<Bundles<'s>> {
        let descriptors = listing::fetch_listing(self.session)?;
        Ok(Bundles {
            session: self.session,
            inner: descriptors.into_iter(),
        })
    }

    /// The raw listing entries, node and metadata included.
    pub fn descriptors(&self) -> DiagResult<Vec<BundleDescriptor>> {
        listing::fetch_listing(self.session)
    }

    /// A handle to a bundle known by name. No request is made.
    pub fn get(&self, name: impl Into<String>) -> Bundle<'s> {
        Bundle::new(self.session, name)
    }
}

impl<'s> Collection for BundleCollection<'s> {
    type Spec = NodeSelector;
    type Item = Bundle<'s>;

    /// POST the selector to `create` and return a handle to the new bundle.
    ///
    /// The bundle is usually still being generated when this returns.
    fn create(&self, spec: NodeSelector) -> DiagResult<Bundle<'s>> {
        let body: Value = self
            .session
            .post(CREATE_PATH, RequestOptions::json(&spec)?)?
            .error_for_status()?
            .json()?;

        let name = body
            .pointer("/extra/bundle_name")
            .and_then(Value::as_str)
            .ok_or_else(|| DiagError::MalformedResponse {
                field: "extra.bundle_name".to_string(),
                reason: "is missing or not a string".to_string(),
            })?;

        Ok(Bundle::new(self.session, name))
    }
}

/// Bundles from a single listing. Finite and not restartable.
#[derive(Debug)]
pub struct Bundles<'s> {
    session: &'s Session,
    inner: std::vec::IntoIter<BundleDescriptor>,
}

impl<'s> Iterator for Bundles<'s> {
    type Item = Bundle<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|descriptor| Bundle::new(self.session, descriptor.bundle_name()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Bundles<'_> {}

impl FusedIterator for Bundles<'_> {}
