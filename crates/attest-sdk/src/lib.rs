//! High-level SDK for attest.
//!
//! Bundles an in-memory cell store, an access gate, and a record registry
//! behind one handle. This is the main entry point for applications
//! embedding the registry.

pub mod error;
pub mod notary;

pub use error::{SdkError, SdkResult};
pub use notary::Attest;

// Re-export key types
pub use attest_registry::{RegistryConfig, RegistryEvent};
pub use attest_types::{AccountId, ChainAnchor, ContentKey, FileRecord};
