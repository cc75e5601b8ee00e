//! Instance Manager
//!
//! Opens engine instances and caches the process-wide shared handle.
//!
//! ## Responsibilities
//! - Provision the storage root before open
//! - Derive the tuning profile (caller override or default)
//! - Run first-time shared initialization exactly once
//! - Hand every caller the same cached handle afterwards
//!
//! ## Concurrency Model
//!
//! The only synchronization point is the init guard in
//! [`StoreProvider::get`]: a `parking_lot::Mutex` serializes the
//! initialization body while a `OnceLock` publishes the handle. The
//! fast path reads the cell without taking the lock; callers arriving
//! during initialization block on the mutex until the winner finishes.
//! There is no timeout — a hang inside the engine's open blocks every
//! waiter.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::config::StoreConfig;
use crate::dir::ensure_dir;
use crate::engine::StorageEngine;
use crate::error::{Result, StoreError};

/// Storage root used when the application does not name one.
pub const DEFAULT_DIRECTORY: &str = "mainnetdb";

/// Open an independent engine instance against `directory`.
///
/// Provisions the directory, derives the configuration, and calls the
/// engine's open entry point. Every call produces a fresh handle owned
/// by the caller; nothing is cached. A supplied `config` is handed to
/// the engine verbatim — no merging, no validation beyond what the
/// engine itself performs.
pub fn open<E: StorageEngine>(
    directory: impl AsRef<Path>,
    config: Option<StoreConfig>,
) -> Result<E> {
    let directory = directory.as_ref();

    ensure_dir(directory).map_err(StoreError::directory_setup)?;

    let config = match config {
        Some(config) => config,
        None => StoreConfig::for_directory(directory),
    };

    tracing::debug!("opening storage engine at {}", directory.display());
    let engine = E::open(&config).map_err(StoreError::engine_open)?;
    tracing::info!("storage engine ready at {}", directory.display());

    Ok(engine)
}

/// Process-wide provider for the shared engine handle
///
/// Construct one at application startup and pass it by reference to
/// consumers; the handle lives as long as the provider. The first
/// [`get`](Self::get) runs the full open sequence exactly once, even
/// under concurrent first calls; after that every `get` returns the
/// cached handle without re-checking the directory or re-opening the
/// engine.
///
/// Initialization failure is returned as a typed error rather than
/// aborting the process; the startup path decides whether a missing
/// storage engine is fatal (for a node binary it should be — there is
/// no retry or reset API here).
pub struct StoreProvider<E> {
    /// Storage root the shared instance opens against.
    directory: PathBuf,

    /// Caller-supplied profile, used verbatim when present.
    config: Option<StoreConfig>,

    /// Serializes the initialization body (double-checked with `cell`).
    init_lock: Mutex<()>,

    /// Published handle; empty until the first successful `get`.
    cell: OnceLock<E>,
}

impl<E: StorageEngine> StoreProvider<E> {
    /// Provider rooted at `directory` with the default tuning profile.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            config: None,
            init_lock: Mutex::new(()),
            cell: OnceLock::new(),
        }
    }

    /// Provider using `config` verbatim, rooted at `config.dir`.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            directory: config.dir.clone(),
            config: Some(config),
            init_lock: Mutex::new(()),
            cell: OnceLock::new(),
        }
    }

    /// Get the shared handle, opening the engine on the first call.
    ///
    /// Exactly one of any racing first-time callers performs the open;
    /// the rest block until it completes and then observe the same
    /// result. On failure the error is returned and the provider stays
    /// uninitialized.
    pub fn get(&self) -> Result<&E> {
        // Fast path: already published.
        if let Some(engine) = self.cell.get() {
            return Ok(engine);
        }

        let _guard = self.init_lock.lock();

        // Re-check: another caller may have won while we waited.
        if let Some(engine) = self.cell.get() {
            return Ok(engine);
        }

        let engine = open::<E>(&self.directory, self.config.clone())?;
        Ok(self.cell.get_or_init(|| engine))
    }

    /// Get the shared handle, assuming startup already initialized it.
    ///
    /// # Panics
    ///
    /// Panics if no prior [`get`](Self::get) succeeded. Intended for
    /// call sites past the startup boundary, where an uninitialized
    /// provider is a programming error.
    pub fn handle(&self) -> &E {
        self.cell
            .get()
            .expect("storage provider used before initialization")
    }

    /// Whether the shared handle has been opened.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Get the storage root this provider opens against.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl<E: StorageEngine> Default for StoreProvider<E> {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORY)
    }
}
