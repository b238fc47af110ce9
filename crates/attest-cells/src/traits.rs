use crate::cell::Cell;
use crate::error::CellResult;
use crate::key::CellKey;
use crate::layout::Region;

/// Fixed-width key-value substrate.
///
/// All implementations must satisfy these invariants:
/// - A cell, once written by the registry, is never rewritten — except in
///   [`Region::Control`], whose counters are updated in place.
/// - Absent cells are indistinguishable from the zero cell to readers that
///   use [`CellStore::load_or_zero`]; the address space behaves as if
///   zero-initialized.
/// - Concurrent reads are always safe.
/// - The substrate never interprets cell contents.
pub trait CellStore: Send + Sync {
    /// Read the cell at `key` in `region`.
    ///
    /// Returns `Ok(None)` if the cell was never written.
    fn load(&self, region: Region, key: CellKey) -> CellResult<Option<Cell>>;

    /// Write the cell at `key` in `region`.
    fn store(&self, region: Region, key: CellKey, value: Cell) -> CellResult<()>;

    /// Read a cell, treating an absent slot as [`Cell::ZERO`].
    fn load_or_zero(&self, region: Region, key: CellKey) -> CellResult<Cell> {
        Ok(self.load(region, key)?.unwrap_or(Cell::ZERO))
    }

    /// Whether the cell at `key` in `region` has been written.
    fn contains(&self, region: Region, key: CellKey) -> CellResult<bool> {
        Ok(self.load(region, key)?.is_some())
    }
}
