use attest_cells::CellError;
use attest_gate::GateError;
use attest_types::{AccountId, ContentKey};

/// Errors from registry operations.
///
/// Every failure is fail-fast and side-effect-free: no operation partially
/// applies before returning one of these.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A mutating call arrived while the gate is closed.
    #[error("registry is paused")]
    Paused,

    /// A caller other than the operator tried an operator-only call.
    #[error("caller {caller} is not the operator")]
    Unauthorized { caller: AccountId },

    /// The content identifier is empty.
    #[error("content identifier must not be empty")]
    EmptyIdentifier,

    /// The display name is empty.
    #[error("display name must not be empty")]
    EmptyName,

    /// The declared size is zero.
    #[error("size must be strictly positive")]
    ZeroSize,

    /// The identifier exceeds the length an ordinal slot can hold.
    #[error("identifier is {bytes} bytes, limit is {max}")]
    IdentifierTooLong { bytes: usize, max: usize },

    /// The identifier is already registered.
    #[error("identifier already registered under key {key}")]
    AlreadyRegistered { key: ContentKey },

    /// An ordinal lookup past the end of the log.
    #[error("ordinal {index} out of range (count {count})")]
    OutOfRange { index: u64, count: u64 },

    /// The record counter cannot grow further.
    #[error("record counter overflowed")]
    CounterOverflow,

    /// The backing cell store failed.
    #[error(transparent)]
    Store(#[from] CellError),
}

impl From<GateError> for RegistryError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::Paused => RegistryError::Paused,
            GateError::Unauthorized { caller } => RegistryError::Unauthorized { caller },
            GateError::Store(e) => RegistryError::Store(e),
        }
    }
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
