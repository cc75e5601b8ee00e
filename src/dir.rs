//! Directory Provisioner
//!
//! Ensures a filesystem path is usable as a storage root, creating it
//! with owner-only permissions when absent. Idempotent: calling it on
//! an existing path is a no-op.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, StoreError};

/// Ensure `path` exists so the engine can open against it.
///
/// If any entry already exists at `path` — directory or plain file —
/// this succeeds without touching it; a non-directory entry is left for
/// the engine open to reject. Otherwise a single directory level is
/// created (the parent must already exist) with mode `0o700` on Unix.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    match fs::metadata(path) {
        Ok(_) => return Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(StoreError::DirCheck {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }

    create_private_dir(path).map_err(|e| StoreError::DirCreate {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("created storage directory {}", path.display());
    Ok(())
}

/// Create a single directory level readable only by the owner.
#[cfg(unix)]
fn create_private_dir(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().mode(0o700).create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> io::Result<()> {
    fs::DirBuilder::new().create(path)
}
