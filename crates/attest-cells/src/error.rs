use crate::key::CellKey;
use crate::layout::Region;

/// Errors from cell substrate operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CellError {
    /// A cell read as an integer carries data above the low 64 bits.
    #[error("cell holds more than 64 bits of integer data")]
    NotAnInteger,

    /// A cell read as a flag holds something other than 0 or 1.
    #[error("cell is not a boolean flag (low byte {0:#04x})")]
    NotAFlag(u8),

    /// Key arithmetic would wrap the 256-bit address space.
    #[error("cell key arithmetic overflowed the address space")]
    KeyOverflow,

    /// A chunk slot inside a string's recorded length is missing.
    #[error("string at {region:?}:{base} is truncated: chunk {chunk} missing")]
    TruncatedString {
        region: Region,
        base: CellKey,
        chunk: u64,
    },

    /// A stored string's bytes do not decode as UTF-8.
    #[error("string at {region:?}:{base} is not valid UTF-8")]
    InvalidUtf8 { region: Region, base: CellKey },
}

/// Result alias for substrate operations.
pub type CellResult<T> = Result<T, CellError>;
