use std::fmt;

use attest_types::ContentKey;

/// Address of one cell within a region: a 256-bit big-endian integer.
///
/// Keys come from two sources with disjoint character: content keys (dense
/// pseudo-random 256-bit values) and ordinal slot bases (small integers
/// scaled by [`crate::ORDINAL_STRIDE`]). Offset arithmetic is always
/// overflow-checked; a wrap around the top of the address space is reported,
/// never performed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey([u8; 32]);

impl CellKey {
    /// The zero key.
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// A key holding a small integer, big-endian, right-aligned.
    pub const fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        let v = value.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            bytes[24 + i] = v[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_raw(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32-byte address.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Add a small offset, propagating the carry across all 32 bytes.
    ///
    /// Returns `None` if the sum would wrap the 256-bit address space.
    pub fn checked_add(&self, offset: u64) -> Option<CellKey> {
        let mut bytes = self.0;
        let mut carry = u128::from(offset);
        for i in (0..32).rev() {
            if carry == 0 {
                break;
            }
            let sum = u128::from(bytes[i]) + (carry & 0xff);
            bytes[i] = (sum & 0xff) as u8;
            carry = (carry >> 8) + (sum >> 8);
        }
        if carry != 0 {
            return None;
        }
        Some(CellKey(bytes))
    }
}

impl From<ContentKey> for CellKey {
    fn from(key: ContentKey) -> Self {
        Self(*key.as_bytes())
    }
}

impl fmt::Debug for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellKey({})", self)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form: first four bytes, enough to tell keys apart in logs.
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u64_is_right_aligned() {
        let key = CellKey::from_u64(0x0102);
        assert_eq!(key.as_bytes()[30..], [0x01, 0x02]);
        assert!(key.as_bytes()[..30].iter().all(|&b| b == 0));
    }

    #[test]
    fn checked_add_without_carry() {
        let key = CellKey::from_u64(5).checked_add(7).unwrap();
        assert_eq!(key, CellKey::from_u64(12));
    }

    #[test]
    fn checked_add_carries_across_bytes() {
        let key = CellKey::from_u64(0xff).checked_add(1).unwrap();
        assert_eq!(key, CellKey::from_u64(0x100));

        let key = CellKey::from_u64(u64::MAX).checked_add(1).unwrap();
        // The carry lands in byte 23, just above the u64 range.
        assert_eq!(key.as_bytes()[23], 1);
        assert!(key.as_bytes()[24..].iter().all(|&b| b == 0));
    }

    #[test]
    fn checked_add_detects_wrap() {
        let top = CellKey::from_raw([0xff; 32]);
        assert!(top.checked_add(1).is_none());
        assert_eq!(top.checked_add(0), Some(top));
    }

    #[test]
    fn content_key_converts_verbatim() {
        let content = ContentKey::derive(b"bafy123");
        let cell_key = CellKey::from(content);
        assert_eq!(cell_key.as_bytes(), content.as_bytes());
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(CellKey::from_u64(1) < CellKey::from_u64(2));
        assert!(CellKey::from_u64(u64::MAX) < CellKey::from_raw([0xff; 32]));
    }
}
