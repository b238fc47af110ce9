use std::sync::{Arc, Mutex};

use attest_cells::{
    load_string, ordinal_base, store_string, Cell, CellError, CellKey, CellStore, Region,
    CHUNK_CAPACITY, COUNT_KEY,
};
use attest_gate::AccessGate;
use attest_types::{AccountId, ChainAnchor, ContentKey, FileRecord};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::event::{EventSink, LogSink, RegistryEvent};

/// The append-only record registry.
///
/// State machine per content key: absent → registered, one way. A record,
/// once written, is never touched again; the only cells that change over a
/// registry's lifetime are the control counters.
///
/// Mutations serialize on an internal lock, giving each `register` call an
/// atomic read-check-write sequence. Reads take no registry lock: records
/// are immutable once their presence flag is set, so concurrent readers can
/// never observe a half-written record.
pub struct RecordRegistry {
    cells: Arc<dyn CellStore>,
    gate: Arc<AccessGate>,
    sink: Box<dyn EventSink>,
    config: RegistryConfig,
    write_lock: Mutex<()>,
}

impl RecordRegistry {
    /// Create a registry over `cells`, gated by `gate`, with defaults.
    pub fn new(cells: Arc<dyn CellStore>, gate: Arc<AccessGate>) -> Self {
        Self::with_config(cells, gate, RegistryConfig::default())
    }

    /// Create a registry with an explicit configuration.
    pub fn with_config(
        cells: Arc<dyn CellStore>,
        gate: Arc<AccessGate>,
        config: RegistryConfig,
    ) -> Self {
        Self {
            cells,
            gate,
            sink: Box::new(LogSink),
            config: config.clamped(),
            write_lock: Mutex::new(()),
        }
    }

    /// Replace the event sink.
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The gate consulted before every mutation.
    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// Register an existence claim for `identifier`.
    ///
    /// Returns the assigned ordinal. Preconditions, checked in order before
    /// anything is written: the gate is open, `identifier` and `name` are
    /// non-empty, `size` is strictly positive, the identifier fits its
    /// ordinal slot, and the identifier is not already registered. Failures
    /// leave no persisted side effect and emit no event.
    pub fn register(
        &self,
        identifier: &str,
        name: &str,
        size: u64,
        uploader: AccountId,
        anchor: ChainAnchor,
    ) -> RegistryResult<u64> {
        self.gate.require_passable()?;

        if identifier.is_empty() {
            return Err(RegistryError::EmptyIdentifier);
        }
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if size == 0 {
            return Err(RegistryError::ZeroSize);
        }
        if identifier.len() > self.config.max_identifier_bytes {
            return Err(RegistryError::IdentifierTooLong {
                bytes: identifier.len(),
                max: self.config.max_identifier_bytes,
            });
        }

        let key = ContentKey::derive(identifier.as_bytes());
        let record_key = CellKey::from(key);

        let _guard = self.write_lock.lock().expect("lock poisoned");

        if self
            .cells
            .load_or_zero(Region::Presence, record_key)?
            .as_bool()?
        {
            return Err(RegistryError::AlreadyRegistered { key });
        }

        // Everything fallible happens before the first write, so a failed
        // registration leaves no partial state.
        let ordinal = self.total_count()?;
        let next_count = ordinal
            .checked_add(1)
            .ok_or(RegistryError::CounterOverflow)?;
        let identifier_base = ordinal_base(ordinal)?;
        let name_chunks = name.len().div_ceil(CHUNK_CAPACITY) as u64;
        record_key
            .checked_add(name_chunks)
            .ok_or(CellError::KeyOverflow)?;

        self.cells
            .store(Region::Size, record_key, Cell::from_u64(size))?;
        self.cells.store(
            Region::Uploader,
            record_key,
            Cell::from_raw(*uploader.as_bytes()),
        )?;
        self.cells
            .store(Region::Height, record_key, Cell::from_u64(anchor.height))?;
        self.cells.store(
            Region::Timestamp,
            record_key,
            Cell::from_u64(anchor.timestamp),
        )?;
        store_string(self.cells.as_ref(), Region::Names, record_key, name)?;
        store_string(
            self.cells.as_ref(),
            Region::Identifiers,
            identifier_base,
            identifier,
        )?;
        self.cells
            .store(Region::Presence, record_key, Cell::from_bool(true))?;
        self.cells
            .store(Region::Control, COUNT_KEY, Cell::from_u64(next_count))?;

        tracing::debug!(key = %key, ordinal, size, "record written");
        self.sink.publish(RegistryEvent::FileRegistered {
            ordinal,
            size,
            uploader,
        });
        Ok(ordinal)
    }

    /// Look up the record for `identifier`.
    ///
    /// A miss is not an error: unregistered identifiers yield the absent
    /// sentinel. Never consults the gate.
    pub fn get_by_identifier(&self, identifier: &str) -> RegistryResult<FileRecord> {
        let key = ContentKey::derive(identifier.as_bytes());
        self.read_record(identifier, key)
    }

    /// Existence probe: cheaper than a full lookup.
    pub fn exists(&self, identifier: &str) -> RegistryResult<bool> {
        let record_key = CellKey::from(ContentKey::derive(identifier.as_bytes()));
        let cell = self.cells.load_or_zero(Region::Presence, record_key)?;
        Ok(cell.as_bool()?)
    }

    /// Number of records ever registered.
    pub fn total_count(&self) -> RegistryResult<u64> {
        let cell = self.cells.load_or_zero(Region::Control, COUNT_KEY)?;
        Ok(cell.as_u64()?)
    }

    /// Look up the record at insertion ordinal `index`.
    ///
    /// Ordinals `0..total_count()` enumerate every record in creation order;
    /// anything past the end is [`RegistryError::OutOfRange`].
    pub fn get_by_ordinal(&self, index: u64) -> RegistryResult<FileRecord> {
        let count = self.total_count()?;
        if index >= count {
            return Err(RegistryError::OutOfRange { index, count });
        }

        let base = ordinal_base(index)?;
        let identifier = load_string(self.cells.as_ref(), Region::Identifiers, base)?;
        let key = ContentKey::derive(identifier.as_bytes());
        self.read_record(&identifier, key)
    }

    fn read_record(&self, identifier: &str, key: ContentKey) -> RegistryResult<FileRecord> {
        let record_key = CellKey::from(key);

        let present = self
            .cells
            .load_or_zero(Region::Presence, record_key)?
            .as_bool()?;
        if !present {
            return Ok(FileRecord::absent(identifier));
        }

        let size = self
            .cells
            .load_or_zero(Region::Size, record_key)?
            .as_u64()?;
        let uploader = AccountId::from_raw(
            *self
                .cells
                .load_or_zero(Region::Uploader, record_key)?
                .as_bytes(),
        );
        let height = self
            .cells
            .load_or_zero(Region::Height, record_key)?
            .as_u64()?;
        let timestamp = self
            .cells
            .load_or_zero(Region::Timestamp, record_key)?
            .as_u64()?;
        let name = load_string(self.cells.as_ref(), Region::Names, record_key)?;

        Ok(FileRecord {
            identifier: identifier.to_owned(),
            name,
            size,
            uploader,
            anchor: ChainAnchor::new(height, timestamp),
            exists: true,
        })
    }
}

impl std::fmt::Debug for RecordRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordRegistry")
            .field("config", &self.config)
            .field("gate", &self.gate)
            .finish()
    }
}
