//! Chunked string storage over fixed-width cells.
//!
//! This module is the only place variable-length data crosses the fixed-width
//! cell boundary. A string based at key `b` occupies:
//!
//! - cell `b`: the UTF-8 byte length as an integer (not the bytes),
//! - cells `b+1, b+2, ...`: the UTF-8 bytes in order, 32 per cell,
//!   left-packed; the final cell's trailer is ignored on read.
//!
//! Readers consume exactly the recorded length and never trust trailing
//! bytes. An absent or zero length cell decodes as the empty string without
//! touching any chunk slot.

use crate::cell::{Cell, CELL_WIDTH};
use crate::error::{CellError, CellResult};
use crate::key::CellKey;
use crate::layout::Region;
use crate::traits::CellStore;

/// String bytes carried per chunk cell.
pub const CHUNK_CAPACITY: usize = CELL_WIDTH;

/// Persist `value` based at `base` in `region`.
///
/// All key arithmetic is checked before the first write, so a string that
/// would run off the top of the address space fails without partial state.
pub fn store_string(
    cells: &dyn CellStore,
    region: Region,
    base: CellKey,
    value: &str,
) -> CellResult<()> {
    let bytes = value.as_bytes();
    let chunk_count = bytes.len().div_ceil(CHUNK_CAPACITY) as u64;
    base.checked_add(chunk_count).ok_or(CellError::KeyOverflow)?;

    cells.store(region, base, Cell::from_u64(bytes.len() as u64))?;
    for (i, chunk) in bytes.chunks(CHUNK_CAPACITY).enumerate() {
        let key = base
            .checked_add(1 + i as u64)
            .ok_or(CellError::KeyOverflow)?;
        cells.store(region, key, Cell::from_chunk(chunk))?;
    }
    Ok(())
}

/// Reconstruct the string based at `base` in `region`.
///
/// An absent or zero length cell yields the empty string. A chunk slot
/// missing inside the recorded length is reported as corruption rather than
/// decoded as zeros.
pub fn load_string(cells: &dyn CellStore, region: Region, base: CellKey) -> CellResult<String> {
    let length = match cells.load(region, base)? {
        None => return Ok(String::new()),
        Some(cell) => cell.as_u64()?,
    };
    if length == 0 {
        return Ok(String::new());
    }

    let chunk_count = length.div_ceil(CHUNK_CAPACITY as u64);
    let mut bytes = Vec::with_capacity(length as usize);
    for i in 0..chunk_count {
        let key = base.checked_add(1 + i).ok_or(CellError::KeyOverflow)?;
        let cell = cells
            .load(region, key)?
            .ok_or(CellError::TruncatedString {
                region,
                base,
                chunk: i,
            })?;
        let remaining = length as usize - bytes.len();
        bytes.extend_from_slice(cell.chunk_bytes(remaining.min(CHUNK_CAPACITY)));
    }

    String::from_utf8(bytes).map_err(|_| CellError::InvalidUtf8 { region, base })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::memory::InMemoryCellStore;

    fn roundtrip(value: &str) -> String {
        let store = InMemoryCellStore::new();
        let base = CellKey::from_u64(1000);
        store_string(&store, Region::Names, base, value).unwrap();
        load_string(&store, Region::Names, base).unwrap()
    }

    // -----------------------------------------------------------------------
    // Round-trip
    // -----------------------------------------------------------------------

    #[test]
    fn roundtrip_short_string() {
        assert_eq!(roundtrip("report.pdf"), "report.pdf");
    }

    #[test]
    fn roundtrip_empty_string() {
        assert_eq!(roundtrip(""), "");
    }

    #[test]
    fn roundtrip_exactly_one_chunk() {
        let s = "a".repeat(CHUNK_CAPACITY);
        assert_eq!(roundtrip(&s), s);
    }

    #[test]
    fn roundtrip_exact_chunk_multiples() {
        for k in 1..=4 {
            let s = "x".repeat(CHUNK_CAPACITY * k);
            assert_eq!(roundtrip(&s), s);
        }
    }

    #[test]
    fn roundtrip_one_past_chunk_boundary() {
        let s = "y".repeat(CHUNK_CAPACITY + 1);
        assert_eq!(roundtrip(&s), s);
    }

    #[test]
    fn roundtrip_multibyte_utf8() {
        let s = "ファイル登録簿 — проверка — ✓";
        assert_eq!(roundtrip(s), s);
    }

    #[test]
    fn empty_string_writes_only_the_length_cell() {
        let store = InMemoryCellStore::new();
        let base = CellKey::from_u64(64);
        store_string(&store, Region::Names, base, "").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.load(Region::Names, base).unwrap().unwrap().as_u64().unwrap(),
            0
        );
    }

    #[test]
    fn chunk_cells_follow_the_length_cell() {
        let store = InMemoryCellStore::new();
        let base = CellKey::from_u64(0);
        let value = "z".repeat(CHUNK_CAPACITY + 3);
        store_string(&store, Region::Identifiers, base, &value).unwrap();

        // Length cell plus two chunk cells.
        assert_eq!(store.len(), 3);
        let first = store
            .load(Region::Identifiers, base.checked_add(1).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(first.chunk_bytes(CHUNK_CAPACITY), "z".repeat(32).as_bytes());
    }

    // -----------------------------------------------------------------------
    // Absent and corrupt state
    // -----------------------------------------------------------------------

    #[test]
    fn load_from_unwritten_base_is_empty() {
        let store = InMemoryCellStore::new();
        let loaded = load_string(&store, Region::Names, CellKey::from_u64(5)).unwrap();
        assert_eq!(loaded, "");
    }

    #[test]
    fn missing_chunk_is_truncation() {
        let store = InMemoryCellStore::new();
        let base = CellKey::from_u64(0);
        // Claim 40 bytes but write no chunk cells.
        store
            .store(Region::Names, base, Cell::from_u64(40))
            .unwrap();

        let err = load_string(&store, Region::Names, base).unwrap_err();
        assert_eq!(
            err,
            CellError::TruncatedString {
                region: Region::Names,
                base,
                chunk: 0
            }
        );
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let store = InMemoryCellStore::new();
        let base = CellKey::from_u64(0);
        store.store(Region::Names, base, Cell::from_u64(2)).unwrap();
        store
            .store(
                Region::Names,
                base.checked_add(1).unwrap(),
                Cell::from_chunk(&[0xff, 0xfe]),
            )
            .unwrap();

        let err = load_string(&store, Region::Names, base).unwrap_err();
        assert_eq!(
            err,
            CellError::InvalidUtf8 {
                region: Region::Names,
                base
            }
        );
    }

    #[test]
    fn store_near_address_space_top_fails_closed() {
        let store = InMemoryCellStore::new();
        let top = CellKey::from_raw([0xff; 32]);
        let err = store_string(&store, Region::Names, top, "needs a chunk").unwrap_err();
        assert_eq!(err, CellError::KeyOverflow);
        // Nothing was written.
        assert!(store.is_empty());
    }

    #[test]
    fn trailer_bytes_are_never_trusted() {
        let store = InMemoryCellStore::new();
        let base = CellKey::from_u64(0);
        store_string(&store, Region::Names, base, "abc").unwrap();
        // Scribble a full chunk over the slot; the recorded length still wins.
        store
            .store(
                Region::Names,
                base.checked_add(1).unwrap(),
                Cell::from_chunk(&[b'a', b'b', b'c', b'X', b'X', b'X']),
            )
            .unwrap();
        assert_eq!(load_string(&store, Region::Names, base).unwrap(), "abc");
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn roundtrip_any_string(value in "\\PC{0,200}") {
            prop_assert_eq!(roundtrip(&value), value);
        }

        #[test]
        fn roundtrip_around_chunk_boundaries(fill in 0usize..4, extra in 0usize..2) {
            let value = "q".repeat(fill * CHUNK_CAPACITY + extra);
            prop_assert_eq!(roundtrip(&value), value);
        }
    }
}
