//! Append-only record registry for attest.
//!
//! The registry stores one [`attest_types::FileRecord`] per content
//! identifier, enforces a single registration per identifier, and exposes
//! every record both by identifier and by insertion ordinal. Records are
//! immutable once written; there is no update or delete operation.
//!
//! # Storage layout
//!
//! Everything lives in the fixed-width cell substrate of `attest-cells`:
//! scalar record fields and the presence flag are keyed by the derived
//! content key in their own regions; display names are chunked at the
//! content key in [`attest_cells::Region::Names`]; identifier strings are
//! chunked at `ordinal * ORDINAL_STRIDE` in
//! [`attest_cells::Region::Identifiers`] so ordinal enumeration can recover
//! them; the record count sits at a well-known control key.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use attest_cells::{CellStore, InMemoryCellStore};
//! use attest_gate::AccessGate;
//! use attest_registry::RecordRegistry;
//! use attest_types::{AccountId, ChainAnchor};
//!
//! let cells: Arc<dyn CellStore> = Arc::new(InMemoryCellStore::new());
//! let operator = AccountId::ephemeral();
//! let gate = Arc::new(AccessGate::new(operator, Arc::clone(&cells)));
//! let registry = RecordRegistry::new(cells, gate);
//!
//! let uploader = AccountId::ephemeral();
//! let ordinal = registry
//!     .register("bafy123", "report.pdf", 2048, uploader, ChainAnchor::new(100, 1_700_000_000))
//!     .unwrap();
//! assert_eq!(ordinal, 0);
//! assert!(registry.exists("bafy123").unwrap());
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod registry;

pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use event::{EventSink, LogSink, RegistryEvent};
pub use registry::RecordRegistry;
