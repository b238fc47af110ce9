use std::fmt;

use crate::error::{CellError, CellResult};

/// Width of one storage slot in bytes.
pub const CELL_WIDTH: usize = 32;

/// One fixed-width value slot.
///
/// A cell is an uninterpreted 32-byte word. The encodings below are the only
/// ones the registry uses: a right-aligned big-endian integer, a 0/1 flag, a
/// raw 32-byte value, or a left-packed chunk of string bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cell([u8; CELL_WIDTH]);

impl Cell {
    /// The all-zero cell. Absent slots read as this value.
    pub const ZERO: Cell = Cell([0u8; CELL_WIDTH]);

    /// Create from raw bytes.
    pub const fn from_raw(bytes: [u8; CELL_WIDTH]) -> Self {
        Self(bytes)
    }

    /// Encode an integer, big-endian, right-aligned.
    pub const fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; CELL_WIDTH];
        let v = value.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            bytes[CELL_WIDTH - 8 + i] = v[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Decode an integer. Fails if any byte above the low 64 bits is set.
    pub fn as_u64(&self) -> CellResult<u64> {
        if self.0[..CELL_WIDTH - 8].iter().any(|&b| b != 0) {
            return Err(CellError::NotAnInteger);
        }
        let mut v = [0u8; 8];
        v.copy_from_slice(&self.0[CELL_WIDTH - 8..]);
        Ok(u64::from_be_bytes(v))
    }

    /// Encode a flag: 1 for `true`, the zero cell for `false`.
    pub const fn from_bool(value: bool) -> Self {
        Self::from_u64(value as u64)
    }

    /// Decode a flag. Only the canonical encodings 0 and 1 are accepted.
    pub fn as_bool(&self) -> CellResult<bool> {
        match self.as_u64() {
            Ok(0) => Ok(false),
            Ok(1) => Ok(true),
            _ => Err(CellError::NotAFlag(self.0[CELL_WIDTH - 1])),
        }
    }

    /// Encode up to [`CELL_WIDTH`] string bytes, left-packed.
    ///
    /// The trailer beyond `bytes.len()` is zeroed but carries no meaning:
    /// readers only consume up to the recorded string length.
    pub fn from_chunk(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= CELL_WIDTH);
        let mut cell = [0u8; CELL_WIDTH];
        cell[..bytes.len()].copy_from_slice(bytes);
        Self(cell)
    }

    /// The first `len` bytes of a left-packed chunk.
    pub fn chunk_bytes(&self, len: usize) -> &[u8] {
        &self.0[..len.min(CELL_WIDTH)]
    }

    /// The raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; CELL_WIDTH] {
        &self.0
    }

    /// Returns `true` if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; CELL_WIDTH]
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
