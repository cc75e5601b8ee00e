//! Engine Boundary
//!
//! Trait abstracting the pre-built embedded storage engine this crate
//! manages. The engine's internals — compaction, memtables, value log,
//! on-disk format — live behind this boundary; nodestore only drives
//! the open/close lifecycle and hands the application a handle.

use crate::config::StoreConfig;

/// Pluggable embedded storage engine interface
///
/// Implementations own their files under `config.dir` and are expected
/// to honor the tuning profile on open. A handle is shared-read once
/// returned; internal concurrency guarantees for get/put are the
/// engine's own contract, not this crate's.
pub trait StorageEngine: Sized + Send + Sync + 'static {
    /// Engine-defined open/operation error.
    type Error: std::error::Error + Send + Sync + 'static;

    // ========== Lifecycle ==========

    /// Open an instance against `config.dir`, consuming the profile.
    ///
    /// The directory is provisioned before this is called; anything
    /// else (held lock files, corrupted manifests, invalid tuning) is
    /// the engine's to reject.
    fn open(config: &StoreConfig) -> Result<Self, Self::Error>;

    /// Close the instance, flushing per the configured close policy.
    fn close(self) -> Result<(), Self::Error>;

    // ========== Core KV Operations ==========

    /// Get the value stored under `key`
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Store a key-value pair (insert or update)
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Error>;

    /// Delete a key
    fn delete(&self, key: &[u8]) -> Result<(), Self::Error>;

    /// Visit every pair whose key starts with `prefix`, in key order.
    ///
    /// `visit` returns `false` to stop early.
    fn scan_prefix(
        &self,
        prefix: &[u8],
        visit: &mut dyn FnMut(&[u8], &[u8]) -> bool,
    ) -> Result<(), Self::Error>;
}
