//! Shared test doubles for the engine boundary
//!
//! `MockEngine` is a BTreeMap-backed stand-in recording the config it
//! was opened with; a global per-directory counter spies on open calls
//! so tests can assert exactly-once initialization. `FailingEngine`
//! rejects every open deterministically.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use nodestore::{StorageEngine, StoreConfig};

// =============================================================================
// Logging
// =============================================================================

/// Install a log subscriber once per test binary.
///
/// Silent unless `RUST_LOG` asks for output; `try_init` tolerates the
/// repeated calls from parallel tests.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nodestore=off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Open-Call Spy
// =============================================================================

fn open_counts() -> &'static Mutex<HashMap<PathBuf, usize>> {
    static COUNTS: OnceLock<Mutex<HashMap<PathBuf, usize>>> = OnceLock::new();
    COUNTS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// How many times `MockEngine::open` ran against `dir`.
///
/// Keyed by directory, so tests stay isolated as long as each uses its
/// own TempDir.
pub fn open_count(dir: &Path) -> usize {
    open_counts().lock().get(dir).copied().unwrap_or(0)
}

// =============================================================================
// MockEngine
// =============================================================================

/// In-memory engine double
#[derive(Debug)]
pub struct MockEngine {
    config: StoreConfig,
    data: Mutex<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MockEngine {
    /// The config this instance was opened with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl StorageEngine for MockEngine {
    type Error = std::io::Error;

    fn open(config: &StoreConfig) -> Result<Self, Self::Error> {
        *open_counts()
            .lock()
            .entry(config.dir.clone())
            .or_insert(0) += 1;

        Ok(Self {
            config: config.clone(),
            data: Mutex::new(BTreeMap::new()),
        })
    }

    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self.data.lock().get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Error> {
        self.data.lock().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), Self::Error> {
        self.data.lock().remove(key);
        Ok(())
    }

    fn scan_prefix(
        &self,
        prefix: &[u8],
        visit: &mut dyn FnMut(&[u8], &[u8]) -> bool,
    ) -> Result<(), Self::Error> {
        for (key, value) in self.data.lock().range(prefix.to_vec()..) {
            if !key.starts_with(prefix) {
                break;
            }
            if !visit(key, value) {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// FailingEngine
// =============================================================================

/// Engine double whose open always fails
#[derive(Debug)]
pub struct FailingEngine;

impl StorageEngine for FailingEngine {
    type Error = std::io::Error;

    fn open(_config: &StoreConfig) -> Result<Self, Self::Error> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "engine rejected open",
        ))
    }

    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn get(&self, _key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error> {
        unreachable!("FailingEngine never opens")
    }

    fn put(&self, _key: &[u8], _value: &[u8]) -> Result<(), Self::Error> {
        unreachable!("FailingEngine never opens")
    }

    fn delete(&self, _key: &[u8]) -> Result<(), Self::Error> {
        unreachable!("FailingEngine never opens")
    }

    fn scan_prefix(
        &self,
        _prefix: &[u8],
        _visit: &mut dyn FnMut(&[u8], &[u8]) -> bool,
    ) -> Result<(), Self::Error> {
        unreachable!("FailingEngine never opens")
    }
}
