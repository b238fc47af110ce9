use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Ambient ledger position captured when a record is created.
///
/// The registry does not produce these values itself — the surrounding
/// execution environment supplies the current height and timestamp, and the
/// engine stamps them onto the record verbatim.
///
/// Ordering: `height` → `timestamp` (total order).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainAnchor {
    /// Ledger height at creation.
    pub height: u64,
    /// Seconds since UNIX epoch at creation.
    pub timestamp: u64,
}

impl ChainAnchor {
    /// Create an anchor with explicit values.
    pub fn new(height: u64, timestamp: u64) -> Self {
        Self { height, timestamp }
    }

    /// The zero anchor. Used by the miss sentinel.
    pub const fn zero() -> Self {
        Self {
            height: 0,
            timestamp: 0,
        }
    }

    /// An anchor at the current wall-clock time with no height.
    ///
    /// For embedded use where no ledger supplies a height.
    pub fn now() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self {
            height: 0,
            timestamp,
        }
    }
}

impl PartialOrd for ChainAnchor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChainAnchor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.height
            .cmp(&other.height)
            .then(self.timestamp.cmp(&other.timestamp))
    }
}

impl fmt::Debug for ChainAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainAnchor(h{}@{})", self.height, self.timestamp)
    }
}

impl fmt::Display for ChainAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}@{}", self.height, self.timestamp)
    }
}
