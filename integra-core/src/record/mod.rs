//! Fixed-layout binary records
//!
//! Records are decoded from response data with explicit shift/mask
//! extraction. Short input is never an error: the available bytes are
//! copied into a zeroed buffer of the record size, leaving the remaining
//! fields at zero.

pub mod event;
pub mod name;

pub use event::{EventClass, EventRecord, Monitoring};
pub use name::NameRecord;

/// Copy up to `N` bytes of `data` into a zeroed buffer
pub(crate) fn fit<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    let len = data.len().min(N);
    buf[..len].copy_from_slice(&data[..len]);
    buf
}

/// Extract `width` bits of `byte` starting at bit `shift` (bit 0 = LSB)
#[inline]
pub(crate) fn bits(byte: u8, shift: u8, width: u8) -> u8 {
    (byte >> shift) & ((1u16 << width) - 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_fit_short() {
        assert_eq!(fit::<4>(&[1, 2]), [1, 2, 0, 0]);
    }
    
    #[test]
    fn test_fit_long() {
        assert_eq!(fit::<2>(&[1, 2, 3]), [1, 2]);
    }
    
    #[test]
    fn test_bits() {
        assert_eq!(bits(0b1101_0110, 0, 2), 0b10);
        assert_eq!(bits(0b1101_0110, 5, 3), 0b110);
        assert_eq!(bits(0xA6, 0, 8), 0xA6);
    }
}
