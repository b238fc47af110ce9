use std::sync::{Arc, RwLock};

use attest_cells::{CellStore, InMemoryCellStore};
use attest_gate::AccessGate;
use attest_registry::{RecordRegistry, RegistryConfig};
use attest_types::{AccountId, ChainAnchor, FileRecord};

use crate::error::SdkResult;

/// High-level attest handle.
///
/// Owns an in-memory cell store, the access gate, and the record registry,
/// and exposes the registry's operation surface as plain methods. The handle
/// stamps each registration with its current [`ChainAnchor`]; an embedder
/// tracking a real ledger advances the anchor via [`Attest::set_anchor`].
pub struct Attest {
    registry: RecordRegistry,
    anchor: RwLock<ChainAnchor>,
}

impl Attest {
    /// Initialize a fresh store with `operator` as the gate authority.
    pub fn init(operator: AccountId) -> Self {
        Self::init_with_config(operator, RegistryConfig::default())
    }

    /// Initialize with an explicit registry configuration.
    pub fn init_with_config(operator: AccountId, config: RegistryConfig) -> Self {
        let cells: Arc<dyn CellStore> = Arc::new(InMemoryCellStore::new());
        let gate = Arc::new(AccessGate::new(operator, Arc::clone(&cells)));
        let registry = RecordRegistry::with_config(cells, gate, config);
        tracing::info!(operator = %operator, "attest store initialized");
        Self {
            registry,
            anchor: RwLock::new(ChainAnchor::now()),
        }
    }

    /// The anchor that will be stamped onto the next registration.
    pub fn anchor(&self) -> ChainAnchor {
        *self.anchor.read().expect("lock poisoned")
    }

    /// Advance the ambient ledger position.
    pub fn set_anchor(&self, anchor: ChainAnchor) {
        *self.anchor.write().expect("lock poisoned") = anchor;
    }

    /// The gate operator recorded at initialization.
    pub fn operator(&self) -> AccountId {
        self.registry.gate().operator()
    }

    // ---- Mutations ----

    /// Register an existence claim on behalf of `caller`.
    ///
    /// Returns the assigned ordinal.
    pub fn register(
        &self,
        caller: AccountId,
        identifier: &str,
        name: &str,
        size: u64,
    ) -> SdkResult<u64> {
        let anchor = self.anchor();
        Ok(self
            .registry
            .register(identifier, name, size, caller, anchor)?)
    }

    /// Set the paused flag. Only the operator may call this.
    pub fn set_paused(&self, caller: AccountId, desired: bool) -> SdkResult<()> {
        Ok(self.registry.gate().set_paused(&caller, desired)?)
    }

    // ---- Reads ----

    /// Look up a record by content identifier. A miss returns the absent
    /// sentinel, not an error.
    pub fn get_by_identifier(&self, identifier: &str) -> SdkResult<FileRecord> {
        Ok(self.registry.get_by_identifier(identifier)?)
    }

    /// Existence probe.
    pub fn exists(&self, identifier: &str) -> SdkResult<bool> {
        Ok(self.registry.exists(identifier)?)
    }

    /// Number of records ever registered.
    pub fn total_count(&self) -> SdkResult<u64> {
        Ok(self.registry.total_count()?)
    }

    /// Look up a record by insertion ordinal.
    pub fn get_by_ordinal(&self, index: u64) -> SdkResult<FileRecord> {
        Ok(self.registry.get_by_ordinal(index)?)
    }

    /// Current value of the paused flag.
    pub fn is_paused(&self) -> SdkResult<bool> {
        Ok(self.registry.gate().is_paused()?)
    }
}

impl std::fmt::Debug for Attest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attest")
            .field("operator", &self.operator())
            .field("anchor", &self.anchor())
            .finish()
    }
}
