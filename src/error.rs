//! Error types for nodestore
//!
//! Provides a unified error type for directory provisioning and
//! engine-open failures.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for nodestore operations
///
/// Every failure during instance construction is terminal for that
/// attempt: nothing in this crate retries.
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Filesystem Errors
    // -------------------------------------------------------------------------
    /// Stat on the storage root failed for a reason other than "not found"
    /// (e.g. permission denied on a parent component).
    #[error("could not check storage directory {path:?}: {source}")]
    DirCheck {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating the storage root failed. Creation is single-level, so a
    /// missing parent surfaces here as well.
    #[error("could not create storage directory {path:?}: {source}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Instance-Open Errors
    // -------------------------------------------------------------------------
    /// Directory provisioning failed while opening an engine instance.
    #[error("could not set up storage directory: {0}")]
    DirectorySetup(#[source] Box<StoreError>),

    /// The storage engine rejected the open request (lock held by another
    /// process, corrupted state, invalid configuration, ...).
    #[error("could not open storage engine: {0}")]
    EngineOpen(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap a provisioning failure at the instance-open boundary.
    pub(crate) fn directory_setup(err: StoreError) -> Self {
        StoreError::DirectorySetup(Box::new(err))
    }

    /// Wrap an engine open error.
    pub(crate) fn engine_open<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::EngineOpen(Box::new(err))
    }
}
