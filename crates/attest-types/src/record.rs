use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::anchor::ChainAnchor;

/// One registered existence claim.
///
/// Records are immutable once written: the registry offers no update or
/// delete operation. `exists` distinguishes a real record from the sentinel
/// returned for identifiers that were never registered — a lookup miss is a
/// clean answer, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// The content identifier, preserved verbatim for enumeration.
    pub identifier: String,
    /// Caller-supplied display name.
    pub name: String,
    /// Declared content size in bytes. Strictly positive for real records.
    pub size: u64,
    /// Identity of whoever created the record.
    pub uploader: AccountId,
    /// Ledger position at creation.
    pub anchor: ChainAnchor,
    /// Presence flag. `false` only on the miss sentinel.
    pub exists: bool,
}

impl FileRecord {
    /// The sentinel returned when `identifier` was never registered.
    ///
    /// Every field other than the echoed identifier is zeroed.
    pub fn absent(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: String::new(),
            size: 0,
            uploader: AccountId::zero(),
            anchor: ChainAnchor::zero(),
            exists: false,
        }
    }
}
