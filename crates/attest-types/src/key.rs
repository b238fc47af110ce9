use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Seed for the low accumulator lane: the 64-bit FNV offset basis.
const SEED_LO: u64 = 0xcbf2_9ce4_8422_2325;
/// Seed for the high accumulator lane: the 64-bit golden-ratio constant.
const SEED_HI: u64 = 0x9e37_79b9_7f4a_7c15;
/// Multiplier for the low lane: the 64-bit FNV prime.
const MUL_LO: u64 = 0x0000_0100_0000_01b3;
/// Multiplier for the high lane: a large odd mixing constant.
const MUL_HI: u64 = 0x2545_f491_4f6c_dd1d;

/// Fixed-width key under which a content identifier is indexed.
///
/// A `ContentKey` is a pure function of the identifier's bytes: identical
/// identifiers always derive the identical key, and distinct identifiers
/// disperse with overwhelming probability. The derivation is a fast two-lane
/// FNV-style mix, not a cryptographic hash — this is an indexing key, not a
/// security boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentKey([u8; 32]);

impl ContentKey {
    /// Derive the key for a content identifier.
    ///
    /// Two independent 64-bit accumulators are seeded with distinct
    /// constants and folded over the input one byte at a time (XOR, then a
    /// wrapping multiply by a large odd constant). The 256-bit output packs
    /// both accumulators and the bitwise complement of each, big-endian.
    pub fn derive(identifier: &[u8]) -> Self {
        let mut lo = SEED_LO;
        let mut hi = SEED_HI;
        for &byte in identifier {
            lo = (lo ^ u64::from(byte)).wrapping_mul(MUL_LO);
            hi = (hi ^ u64::from(byte)).wrapping_mul(MUL_HI);
        }

        let mut out = [0u8; 32];
        out[0..8].copy_from_slice(&lo.to_be_bytes());
        out[8..16].copy_from_slice(&hi.to_be_bytes());
        out[16..24].copy_from_slice(&(!lo).to_be_bytes());
        out[24..32].copy_from_slice(&(!hi).to_be_bytes());
        Self(out)
    }

    /// Create from raw bytes. Use [`ContentKey::derive`] for production code.
    pub fn from_raw(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32-byte key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentKey({})", self.short_hex())
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for ContentKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<ContentKey> for [u8; 32] {
    fn from(key: ContentKey) -> Self {
        key.0
    }
}
