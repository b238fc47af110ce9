use std::collections::HashMap;
use std::sync::RwLock;

use crate::cell::Cell;
use crate::error::CellResult;
use crate::key::CellKey;
use crate::layout::Region;
use crate::traits::CellStore;

/// In-memory, HashMap-based cell store.
///
/// Intended for tests and embedding. All cells are held in memory behind a
/// `RwLock` for safe concurrent access.
pub struct InMemoryCellStore {
    cells: RwLock<HashMap<(Region, CellKey), Cell>>,
}

impl InMemoryCellStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            cells: RwLock::new(HashMap::new()),
        }
    }

    /// Number of written cells across all regions.
    pub fn len(&self) -> usize {
        self.cells.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no cell has been written.
    pub fn is_empty(&self) -> bool {
        self.cells.read().expect("lock poisoned").is_empty()
    }

    /// Remove every cell from the store.
    pub fn clear(&self) {
        self.cells.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryCellStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CellStore for InMemoryCellStore {
    fn load(&self, region: Region, key: CellKey) -> CellResult<Option<Cell>> {
        let map = self.cells.read().expect("lock poisoned");
        Ok(map.get(&(region, key)).copied())
    }

    fn store(&self, region: Region, key: CellKey, value: Cell) -> CellResult<()> {
        let mut map = self.cells.write().expect("lock poisoned");
        map.insert((region, key), value);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryCellStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCellStore")
            .field("cell_count", &self.len())
            .finish()
    }
}
