//! A single diagnostics bundle: readiness check and download.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use diag_core::errors::{DiagError, DiagResult, TransportError};

use super::listing::{basename, fetch_listing};
use crate::session::{RequestOptions, Session};

/// Handle to a server-side bundle, known by name only.
///
/// The server decides whether the bundle exists or is finished; this handle
/// caches nothing.
#[derive(Debug, Clone)]
pub struct Bundle<'s> {
    session: &'s Session,
    name: String,
}

impl<'s> Bundle<'s> {
    pub fn new(session: &'s Session, name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::info!(bundle = %name, "created diagnostic bundle handle");
        Self { session, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The remote file name once the bundle is finished, `None` while pending.
    ///
    /// Matches on basename only, so two nodes listing different paths with
    /// the same basename are indistinguishable; the first listed wins.
    pub fn status(&self) -> DiagResult<Option<String>> {
        tracing::info!(bundle = %self.name, "retrieving bundle status");
        let found = fetch_listing(self.session)?
            .into_iter()
            .find(|descriptor| descriptor.bundle_name() == self.name)
            .map(|descriptor| descriptor.file_name);
        Ok(found)
    }

    /// Whether [`status`](Self::status) currently reports the bundle finished.
    pub fn is_ready(&self) -> DiagResult<bool> {
        Ok(self.status()?.is_some())
    }

    /// Stream the finished bundle into `destination`, replacing any existing
    /// file. Returns the number of bytes written.
    ///
    /// Fails with [`DiagError::Precondition`] while the bundle is pending.
    /// The `serve/` status is not checked: whatever body the server sends is
    /// written. A transport failure mid-stream leaves a truncated file behind.
    pub fn download(&self, destination: impl AsRef<Path>) -> DiagResult<u64> {
        let destination = destination.as_ref();
        let file_name = self.status()?.ok_or_else(|| DiagError::Precondition {
            reason: format!("bundle {} is not ready yet", self.name),
        })?;

        tracing::info!(
            bundle = %self.name,
            destination = %destination.display(),
            "downloading diagnostic bundle"
        );

        let serve_path = format!("serve/{}", basename(&file_name));
        let response = self.session.get(&serve_path, RequestOptions::default())?;
        if !response.is_success() {
            tracing::warn!(
                bundle = %self.name,
                status = response.status(),
                "serve returned a non-success status, writing body anyway"
            );
        }

        let mut file = File::create(destination).map_err(|e| io_err(destination, e))?;
        let written = copy_in_chunks(
            response.into_body(),
            &mut file,
            self.session.chunk_size(),
            destination,
        )?;
        file.flush().map_err(|e| io_err(destination, e))?;

        tracing::info!(bundle = %self.name, bytes = written, "bundle download complete");
        Ok(written)
    }
}

/// Copy `reader` into `writer`, reading at most `chunk_size` bytes at a time
/// and writing each chunk as soon as it arrives.
fn copy_in_chunks(
    mut reader: impl Read,
    writer: &mut impl Write,
    chunk_size: usize,
    destination: &Path,
) -> DiagResult<u64> {
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(TransportError::BodyRead {
                    reason: e.to_string(),
                }
                .into())
            }
        };
        writer
            .write_all(&buf[..n])
            .map_err(|e| io_err(destination, e))?;
        total += n as u64;
    }
}

fn io_err(path: &Path, e: std::io::Error) -> DiagError {
    DiagError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
