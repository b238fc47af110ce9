//! Mutation gate for the attest registry.
//!
//! The gate is a single persisted boolean consulted before every mutating
//! registry operation. Only the operator identity fixed at construction may
//! toggle it; reads are never gated. There is no timed or automatic unpause —
//! the flag changes only by an explicit authorized call.

pub mod error;
pub mod gate;

pub use error::GateError;
pub use gate::AccessGate;
