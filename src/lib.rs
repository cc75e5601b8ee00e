//! # nodestore
//!
//! Lifecycle manager for an embedded, ordered key-value storage engine:
//! - Idempotent storage-root provisioning with owner-only permissions
//! - A fixed default tuning profile, overridable per open
//! - Explicit opens producing independent handles
//! - A process-wide provider caching one shared handle behind a
//!   one-time-initialization guard
//!
//! The engine itself is a collaborator behind the [`StorageEngine`]
//! trait; its compaction, memtables, value log, and on-disk format are
//! not this crate's concern.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Application Callers                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ get()
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 StoreProvider (shared)                       │
//! │          (exactly-once init, cached handle)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ first call only
//!          ┌────────────┼────────────┐
//!          ▼            ▼            ▼
//!   ┌────────────┐ ┌───────────┐ ┌──────────────┐
//!   │ ensure_dir │ │StoreConfig│ │ Engine::open │
//!   │  (0o700)   │ │ (profile) │ │  (external)  │
//!   └────────────┘ └───────────┘ └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod dir;
pub mod engine;
pub mod error;
pub mod provider;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::{AccessMode, StoreConfig};
pub use dir::ensure_dir;
pub use engine::StorageEngine;
pub use error::{Result, StoreError};
pub use provider::{open, StoreProvider, DEFAULT_DIRECTORY};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of nodestore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
