use serde::{Deserialize, Serialize};

use crate::cell::CELL_WIDTH;
use crate::error::{CellError, CellResult};
use crate::key::CellKey;

/// The named storage regions of a registry store.
///
/// Every cell belongs to exactly one region; regions are the explicit
/// partition of the address space, fixed at this enumeration rather than
/// assigned by declaration order. Record-field regions are keyed by content
/// key; [`Region::Identifiers`] is keyed by ordinal slot base; and
/// [`Region::Control`] holds the store-wide counters at well-known keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Presence flags, one per registered content key.
    Presence,
    /// Declared content sizes.
    Size,
    /// Uploader identities.
    Uploader,
    /// Ledger heights at creation.
    Height,
    /// Timestamps at creation.
    Timestamp,
    /// Chunked display names, based at the content key.
    Names,
    /// Chunked identifier strings, based at `ordinal * ORDINAL_STRIDE`.
    Identifiers,
    /// Store-wide state: [`COUNT_KEY`], [`PAUSED_KEY`].
    Control,
}

/// Cells reserved per ordinal slot in [`Region::Identifiers`].
///
/// This stride is a fixed layout invariant: slot `i` owns keys
/// `[i * 256, (i + 1) * 256)`, one length cell plus up to 255 chunk cells.
/// The registry bounds identifier length to [`MAX_CHUNKED_BYTES`] so no
/// identifier can spill into the next slot's reserved range. Shrinking the
/// stride without tightening that bound would let neighboring slots collide.
pub const ORDINAL_STRIDE: u64 = 256;

/// Longest string an ordinal slot can hold: 255 chunk cells of 32 bytes.
pub const MAX_CHUNKED_BYTES: usize = (ORDINAL_STRIDE as usize - 1) * CELL_WIDTH;

/// Control cell holding the total record count.
pub const COUNT_KEY: CellKey = CellKey::from_u64(0);

/// Control cell holding the paused flag.
pub const PAUSED_KEY: CellKey = CellKey::from_u64(1);

/// Base key of ordinal slot `ordinal` in [`Region::Identifiers`].
///
/// Fails closed if the scaled slot index overflows.
pub fn ordinal_base(ordinal: u64) -> CellResult<CellKey> {
    let slot = ordinal
        .checked_mul(ORDINAL_STRIDE)
        .ok_or(CellError::KeyOverflow)?;
    Ok(CellKey::from_u64(slot))
}
