//! # diag-client
//!
//! Blocking client for a cluster's diagnostics-bundle API: trigger bundle
//! creation, list existing bundles, check whether a bundle is ready, and
//! stream a finished bundle to disk.
//!
//! The HTTP transport, token source and base-URL resolution are injected
//! behind traits so a [`Session`] can be built without touching process
//! environment. [`System`] wires the default implementations from a
//! [`diag_core::DiagConfig`].
//!
//! ```no_run
//! use std::{thread, time::Duration};
//!
//! use diag_client::{Collection, NodeSelector, System};
//! use diag_core::DiagConfig;
//!
//! # fn main() -> diag_core::DiagResult<()> {
//! let config = DiagConfig::load(None, None)?;
//! let system = System::from_config(&config)?;
//! let diagnostics = system.diagnostics();
//!
//! let bundle = diagnostics.create(NodeSelector::default())?;
//! while bundle.status()?.is_none() {
//!     thread::sleep(Duration::from_secs(5));
//! }
//! bundle.download("bundle.zip")?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod collection;
pub mod diagnostics;
pub mod resolver;
pub mod session;
pub mod system;
pub mod transport;

pub use auth::{Credential, EnvToken, StaticToken, TokenProvider};
pub use collection::Collection;
pub use diagnostics::{Bundle, BundleCollection, BundleDescriptor, Bundles, NodeSelector};
pub use resolver::{BaseUrlResolver, ClusterPath, FixedUrl};
pub use session::{RequestOptions, Session};
pub use system::System;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};

/// URL type used throughout the client.
pub use reqwest::Url;
