//! Foundation types for the attest registry.
//!
//! This crate provides the identity, key, and record types used throughout
//! the attest workspace. Every other attest crate depends on `attest-types`.
//!
//! # Key Types
//!
//! - [`ContentKey`] — fixed-width key derived from a content identifier's bytes
//! - [`AccountId`] — fixed-width uploader/operator identity, resolved upstream
//! - [`ChainAnchor`] — ledger height and timestamp captured at registration
//! - [`FileRecord`] — one registered existence claim

pub mod account;
pub mod anchor;
pub mod error;
pub mod key;
pub mod record;

pub use account::AccountId;
pub use anchor::ChainAnchor;
pub use error::TypeError;
pub use key::ContentKey;
pub use record::FileRecord;
