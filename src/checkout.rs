//! Local repository checkout acquisition and teardown.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use log::{debug, warn};
use thiserror::Error;

/// Errors from checkout acquisition or teardown.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Clone or worktree materialization failed
    #[error("Checkout failed: {0}")]
    Acquire(String),

    /// Removing the working copy failed
    #[error("Checkout cleanup failed: {0}")]
    Release(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Supplies and reclaims a local working copy of a repository.
///
/// Each scoring run owns its checkout exclusively; `release` runs on
/// every exit path so disk usage stays bounded.
pub trait CheckoutProvider: Send + Sync {
    /// Materialize a working copy of `url` and return its path.
    fn acquire(&self, url: &str) -> impl Future<Output = Result<PathBuf, CheckoutError>> + Send;

    /// Remove a working copy previously returned by `acquire`.
    fn release(&self, path: &Path) -> impl Future<Output = Result<(), CheckoutError>> + Send;
}

/// Checkout provider that clones with `gix` into a temporary directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct GixCheckoutProvider;

impl CheckoutProvider for GixCheckoutProvider {
    async fn acquire(&self, url: &str) -> Result<PathBuf, CheckoutError> {
        let dest = tempfile::TempDir::new()?.keep();
        debug!("Cloning {url} into {}", dest.display());

        let url_owned = url.to_string();
        let clone_dest = dest.clone();
        let clone_result = tokio::task::spawn_blocking(move || {
            let parsed = gix::url::parse(url_owned.as_str().into())
                .map_err(|e| CheckoutError::Acquire(e.to_string()))?;
            let mut prepared = gix::prepare_clone(parsed, &clone_dest)
                .map_err(|e| CheckoutError::Acquire(e.to_string()))?;
            let (mut checkout, _outcome) = prepared
                .fetch_then_checkout(gix::progress::Discard, &AtomicBool::new(false))
                .map_err(|e| CheckoutError::Acquire(e.to_string()))?;
            checkout
                .main_worktree(gix::progress::Discard, &AtomicBool::new(false))
                .map_err(|e| CheckoutError::Acquire(e.to_string()))?;
            Ok(())
        })
        .await
        .map_err(|e| CheckoutError::Acquire(format!("clone task aborted: {e}")))?;

        if let Err(e) = clone_result {
            // The run is already failing; cleanup is best-effort.
            if let Err(rm) = std::fs::remove_dir_all(&dest) {
                warn!("Failed to remove partial checkout {}: {rm}", dest.display());
            }
            return Err(e);
        }

        Ok(dest)
    }

    async fn release(&self, path: &Path) -> Result<(), CheckoutError> {
        debug!("Removing checkout {}", path.display());
        tokio::fs::remove_dir_all(path)
            .await
            .map_err(|e| CheckoutError::Release(format!("{}: {e}", path.display())))
    }
}
