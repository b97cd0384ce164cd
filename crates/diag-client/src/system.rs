//! Entry point for the cluster's `/system` diagnostics API.

use std::sync::Arc;

use diag_core::config::{AuthScheme, DiagConfig};
use diag_core::errors::DiagResult;

use crate::auth::{EnvToken, StaticToken, TokenProvider};
use crate::diagnostics::BundleCollection;
use crate::resolver::{BaseUrlResolver, ClusterPath};
use crate::session::Session;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Owns the session for the diagnostics endpoint and hands out collections.
#[derive(Debug, Clone)]
pub struct System {
    session: Session,
}

impl System {
    /// Wire the default collaborators from configuration.
    ///
    /// The token comes from `cluster.token` when set, otherwise from the
    /// environment variable named by `cluster.token_env`.
    pub fn from_config(config: &DiagConfig) -> DiagResult<Self> {
        let cluster_url = config.require_cluster_url()?;
        let transport = Arc::new(ReqwestTransport::new(&config.transport)?);
        let resolver = ClusterPath::new(cluster_url, config.cluster.diagnostics_path.clone());

        let tokens: Box<dyn TokenProvider> = match config.cluster.token {
            Some(ref token) => Box::new(StaticToken::new(token.clone())),
            None => Box::new(EnvToken::new(config.cluster.token_env.clone())),
        };

        let session = Session::new(transport, &resolver, tokens.as_ref(), config.cluster.auth_scheme)?
            .with_chunk_size(config.download.chunk_size);

        tracing::debug!(base_url = %session.base_url(), "diagnostics session ready");
        Ok(Self { session })
    }

    /// Build from explicit collaborators.
    pub fn with_collaborators(
        transport: Arc<dyn HttpTransport>,
        resolver: &dyn BaseUrlResolver,
        tokens: &dyn TokenProvider,
        scheme: AuthScheme,
    ) -> DiagResult<Self> {
        Ok(Self {
            session: Session::new(transport, resolver, tokens, scheme)?,
        })
    }

    pub fn from_session(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// A fresh view over this session's diagnostics bundles.
    pub fn diagnostics(&self) -> BundleCollection<'_> {
        BundleCollection::new(&self.session)
    }
}
