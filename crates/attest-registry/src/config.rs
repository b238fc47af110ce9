use serde::{Deserialize, Serialize};

use attest_cells::MAX_CHUNKED_BYTES;

/// Configuration for a record registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Longest accepted identifier, in UTF-8 bytes.
    ///
    /// Never effective above [`MAX_CHUNKED_BYTES`]: the registry clamps the
    /// bound so an identifier can never spill past its ordinal slot's
    /// reserved key range.
    pub max_identifier_bytes: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_identifier_bytes: MAX_CHUNKED_BYTES,
        }
    }
}

impl RegistryConfig {
    /// The configuration with the stride bound enforced.
    pub(crate) fn clamped(mut self) -> Self {
        self.max_identifier_bytes = self.max_identifier_bytes.min(MAX_CHUNKED_BYTES);
        self
    }
}
