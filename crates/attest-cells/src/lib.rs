//! Fixed-width cell substrate for the attest registry.
//!
//! The registry persists everything — scalar record fields, presence flags,
//! control counters, and variable-length strings — through a single primitive:
//! a mapping from a fixed-width key to a fixed-width 32-byte value slot (a
//! "cell"), partitioned into named [`Region`]s. Absent cells read as zero, so
//! a fresh store needs no initialization writes.
//!
//! Variable-length data crosses the fixed-width boundary in exactly one
//! place: the chunked string codec in [`chunk`], which splits a string's
//! UTF-8 bytes into 32-byte chunks addressed by offsets from a base key.
//!
//! # Design Rules
//!
//! 1. Record cells are written once and never rewritten; only [`Region::Control`]
//!    cells change over time.
//! 2. Key arithmetic fails closed: any offset that would wrap the 256-bit
//!    address space is an error, never a silent wrap.
//! 3. Concurrent reads are always safe.
//! 4. The substrate never interprets what the registry stores in a cell.

pub mod cell;
pub mod chunk;
pub mod error;
pub mod key;
pub mod layout;
pub mod memory;
pub mod traits;

pub use cell::{Cell, CELL_WIDTH};
pub use chunk::{load_string, store_string, CHUNK_CAPACITY};
pub use error::{CellError, CellResult};
pub use key::CellKey;
pub use layout::{ordinal_base, Region, COUNT_KEY, MAX_CHUNKED_BYTES, ORDINAL_STRIDE, PAUSED_KEY};
pub use memory::InMemoryCellStore;
pub use traits::CellStore;
