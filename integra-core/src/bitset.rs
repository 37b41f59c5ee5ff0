//! Bitmask encoded sets of zones, outputs and partitions
//!
//! Bit 0 of byte 0 is the first position, bits within a byte are taken
//! least-significant first.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Default bitmap length for pack (16 bytes, 128 objects)
pub const DEFAULT_BITS: u32 = 128;

/// Positions of set bits, numbered from `offset`
///
/// # Examples
///
/// ```
/// use integra_core::bitset;
///
/// let set = bitset::positions(&[0x05, 0x80], 1);
/// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3, 16]);
/// ```
pub fn positions(data: &[u8], offset: u32) -> BTreeSet<u32> {
    let mut set = BTreeSet::new();
    
    for (byte_idx, &byte) in data.iter().enumerate() {
        for bit in 0..8 {
            if byte & (1 << bit) != 0 {
                set.insert(byte_idx as u32 * 8 + bit + offset);
            }
        }
    }
    
    set
}

/// Build a zero-filled bitmap of `length_bits / 8` bytes with the given positions set
///
/// # Errors
///
/// Returns [`Error::BitOutOfRange`] for a position outside
/// `offset..offset + length_bits`.
pub fn pack<'a>(
    positions: impl IntoIterator<Item = &'a u32>,
    length_bits: u32,
    offset: u32,
) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; length_bits.div_ceil(8) as usize];
    
    for &pos in positions {
        if pos < offset || pos - offset >= length_bits {
            return Err(Error::BitOutOfRange {
                position: pos,
                first: offset,
                last: (offset + length_bits).saturating_sub(1),
            });
        }
        
        let idx = pos - offset;
        buf[(idx / 8) as usize] |= 1 << (idx % 8);
    }
    
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    
    fn sample() -> Vec<u8> {
        let mut buf = vec![0u8; 16];
        buf[0] = 0x04;
        buf[1] = 0x20;
        buf[15] = 0x80;
        buf
    }
    
    #[test]
    fn test_positions() {
        let set = positions(&sample(), 1);
        assert_eq!(set, BTreeSet::from([3, 14, 128]));
    }
    
    #[test]
    fn test_positions_offset() {
        let set = positions(&[0x01], 0);
        assert_eq!(set, BTreeSet::from([0]));
    }
    
    #[test]
    fn test_positions_empty() {
        assert!(positions(&[0; 16], 1).is_empty());
        assert!(positions(&[], 1).is_empty());
    }
    
    #[test]
    fn test_pack() {
        let buf = pack(&BTreeSet::from([3, 14, 128]), DEFAULT_BITS, 1).unwrap();
        assert_eq!(buf, sample());
    }
    
    #[test]
    fn test_pack_out_of_range() {
        assert!(matches!(
            pack(&[129], DEFAULT_BITS, 1),
            Err(Error::BitOutOfRange { position: 129, first: 1, last: 128 })
        ));
        assert!(pack(&[0], DEFAULT_BITS, 1).is_err());
    }
    
    proptest! {
        #[test]
        fn prop_pack_positions_roundtrip(set in proptest::collection::btree_set(1u32..=128, 0..40)) {
            let buf = pack(&set, DEFAULT_BITS, 1).unwrap();
            prop_assert_eq!(buf.len(), 16);
            prop_assert_eq!(positions(&buf, 1), set);
        }
    }
}
