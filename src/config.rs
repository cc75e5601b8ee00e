//! Configuration for nodestore
//!
//! Centralized tuning profile for the embedded storage engine, with a
//! fixed set of defaults chosen to trade memory, throughput, and
//! durability in a deliberate way.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How the engine maps table and value-log files into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    /// Plain buffered file I/O.
    FileIo,

    /// Memory-mapped access. Trades address-space and page-cache use
    /// for lower read latency.
    MemoryMap,
}

/// Tuning profile consumed by the engine's open entry point.
///
/// Immutable once constructed: `open` takes it by reference and the
/// engine is expected to copy whatever it needs. The defaults below are
/// a contract — tests pin them as golden values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    // -------------------------------------------------------------------------
    // Storage Root
    // -------------------------------------------------------------------------
    /// Directory holding every engine file (tables, value log, manifest).
    pub dir: PathBuf,

    // -------------------------------------------------------------------------
    // Level Sizing
    // -------------------------------------------------------------------------
    /// Target size of the first on-disk level (bytes).
    pub level_one_size: u64,

    /// Growth multiplier from one level to the next.
    pub level_size_multiplier: usize,

    /// Maximum number of on-disk levels.
    pub max_levels: usize,

    /// Maximum size of a single table (bytes).
    pub max_table_size: u64,

    // -------------------------------------------------------------------------
    // File Access
    // -------------------------------------------------------------------------
    /// Access mode for sorted tables.
    pub table_access: AccessMode,

    /// Access mode for value-log segments.
    pub value_log_access: AccessMode,

    // -------------------------------------------------------------------------
    // Compaction & Write Buffers
    // -------------------------------------------------------------------------
    /// Concurrent background compactor workers. Compactions are
    /// expensive; this bounds their CPU and I/O cost.
    pub num_compactors: usize,

    /// Level-zero table count that triggers flush pressure.
    pub num_level_zero_tables: usize,

    /// Level-zero table count at which writes stall. Backpressure so
    /// unflushed data cannot grow without bound.
    pub num_level_zero_tables_stall: usize,

    /// In-memory write buffers retained before flushing.
    pub num_memtables: usize,

    // -------------------------------------------------------------------------
    // Durability & Retention
    // -------------------------------------------------------------------------
    /// Sync every write to stable storage before acknowledging it.
    pub sync_writes: bool,

    /// Versions retained per key. 1 = latest only, no history.
    pub num_versions_to_keep: usize,

    /// Run level-zero compaction to completion on close. Slower
    /// shutdown, tidier on-disk state.
    pub compact_l0_on_close: bool,

    // -------------------------------------------------------------------------
    // Value Log
    // -------------------------------------------------------------------------
    /// Size of one value-log segment (bytes).
    pub value_log_file_size: u64,

    /// Maximum entries per value-log segment before rotation.
    pub value_log_max_entries: u32,

    /// Values smaller than this (bytes) are stored inline with keys
    /// instead of in the value log.
    pub value_threshold: usize,

    /// Value-log rotations between metadata flushes to disk.
    pub log_rotates_to_flush: u16,

    // -------------------------------------------------------------------------
    // Startup Recovery
    // -------------------------------------------------------------------------
    /// Truncate corrupted or incomplete log tails on open. Forced on
    /// for Windows, whose filesystem lacks atomic log-append
    /// guarantees; off everywhere else.
    pub truncate: bool,
}

impl StoreConfig {
    /// Default tuning profile rooted at the given directory.
    pub fn for_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Create a new config builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("mainnetdb"),
            level_one_size: 256 << 20,
            level_size_multiplier: 10,
            max_levels: 7,
            max_table_size: 64 << 20,
            table_access: AccessMode::MemoryMap,
            value_log_access: AccessMode::MemoryMap,
            num_compactors: 2,
            num_level_zero_tables: 5,
            num_level_zero_tables_stall: 10,
            num_memtables: 5,
            sync_writes: true,
            num_versions_to_keep: 1,
            compact_l0_on_close: true,
            value_log_file_size: (1 << 30) - 1,
            value_log_max_entries: 1_000_000,
            value_threshold: 32,
            log_rotates_to_flush: 2,
            truncate: cfg!(windows),
        }
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the storage root directory
    pub fn dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dir = path.into();
        self
    }

    /// Set the target size of the first on-disk level (in bytes)
    pub fn level_one_size(mut self, bytes: u64) -> Self {
        self.config.level_one_size = bytes;
        self
    }

    /// Set the maximum table size (in bytes)
    pub fn max_table_size(mut self, bytes: u64) -> Self {
        self.config.max_table_size = bytes;
        self
    }

    /// Set the access mode for both tables and the value log
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.config.table_access = mode;
        self.config.value_log_access = mode;
        self
    }

    /// Set the number of background compactor workers
    pub fn num_compactors(mut self, count: usize) -> Self {
        self.config.num_compactors = count;
        self
    }

    /// Set whether every write is synced before acknowledgment
    pub fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    /// Set the inline-value threshold (in bytes)
    pub fn value_threshold(mut self, bytes: usize) -> Self {
        self.config.value_threshold = bytes;
        self
    }

    /// Set whether corrupted log tails are truncated on open
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.config.truncate = truncate;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
