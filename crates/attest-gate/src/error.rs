use attest_cells::CellError;
use attest_types::AccountId;

/// Errors from gate operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GateError {
    /// A mutating call arrived while the gate is closed.
    #[error("registry is paused")]
    Paused,

    /// A caller other than the designated operator tried to toggle the gate.
    #[error("caller {caller} is not the operator")]
    Unauthorized { caller: AccountId },

    /// The backing cell store failed.
    #[error(transparent)]
    Store(#[from] CellError),
}
