use std::sync::Arc;

use attest_cells::{Cell, CellStore, Region, PAUSED_KEY};
use attest_types::AccountId;

use crate::error::GateError;

/// The registry's mutation gate.
///
/// Holds the operator identity recorded at deployment and persists the
/// paused flag in the store's [`Region::Control`] region, so the flag lives
/// exactly as long as the store itself. An absent flag cell reads as
/// unpaused — a fresh store is open for registration without any
/// initialization write.
pub struct AccessGate {
    operator: AccountId,
    cells: Arc<dyn CellStore>,
}

impl AccessGate {
    /// Create a gate for `cells` with the given operator identity.
    pub fn new(operator: AccountId, cells: Arc<dyn CellStore>) -> Self {
        Self { operator, cells }
    }

    /// The operator identity recorded at construction.
    pub fn operator(&self) -> AccountId {
        self.operator
    }

    /// Current value of the paused flag.
    pub fn is_paused(&self) -> Result<bool, GateError> {
        let cell = self.cells.load_or_zero(Region::Control, PAUSED_KEY)?;
        Ok(cell.as_bool()?)
    }

    /// Fail with [`GateError::Paused`] if the gate is closed.
    ///
    /// Consulted by every mutating registry operation, never by reads.
    pub fn require_passable(&self) -> Result<(), GateError> {
        if self.is_paused()? {
            return Err(GateError::Paused);
        }
        Ok(())
    }

    /// Set the paused flag. Only the operator may call this.
    pub fn set_paused(&self, caller: &AccountId, desired: bool) -> Result<(), GateError> {
        if *caller != self.operator {
            tracing::warn!(caller = %caller, "pause toggle rejected");
            return Err(GateError::Unauthorized { caller: *caller });
        }
        self.cells
            .store(Region::Control, PAUSED_KEY, Cell::from_bool(desired))?;
        tracing::warn!(paused = desired, operator = %self.operator, "pause flag set");
        Ok(())
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("operator", &self.operator)
            .finish()
    }
}
