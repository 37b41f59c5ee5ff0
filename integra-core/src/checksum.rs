//! Satel running checksum
//!
//! From the integration protocol manual:
//! 1. Start with `0x147A`
//! 2. For every byte: rotate the accumulator left by one bit
//! 3. Complement it
//! 4. Add the byte and the accumulator's high byte, modulo `0x10000`

use tracing::trace;

use crate::constants::CHECKSUM_SEED;

/// Calculate checksum over a byte sequence
///
/// # Examples
///
/// ```
/// use integra_core::checksum;
///
/// assert_eq!(checksum::calculate(&[0x09]), 0xD7EB);
/// ```
pub fn calculate(data: &[u8]) -> u16 {
    let mut crc = CHECKSUM_SEED;
    
    for &b in data {
        crc = crc.rotate_left(1);
        crc = !crc;
        crc = crc
            .wrapping_add(crc >> 8)
            .wrapping_add(u16::from(b));
    }
    
    trace!(
        len = data.len(),
        checksum = format!("0x{:04X}", crc),
        "Calculated checksum"
    );
    
    crc
}

/// Verify checksum
pub fn verify(data: &[u8], expected: u16) -> bool {
    calculate(data) == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_checksum_known_values() {
        assert_eq!(calculate(&[0x09]), 0xD7EB);
        assert_eq!(calculate(&[0x1C]), 0xD7FE);
    }
    
    #[test]
    fn test_checksum_empty() {
        assert_eq!(calculate(&[]), CHECKSUM_SEED);
    }
    
    #[test]
    fn test_checksum_verify() {
        let data = [0xEE, 0x01, 0x05];
        let checksum = calculate(&data);
        
        assert!(verify(&data, checksum));
        assert!(!verify(&data, checksum.wrapping_add(1)));
    }
    
    #[test]
    fn test_checksum_order_matters() {
        assert_ne!(calculate(&[0x01, 0x02]), calculate(&[0x02, 0x01]));
    }
    
    #[test]
    fn test_checksum_large_input() {
        let data = vec![0xFF; 1000];
        assert_eq!(calculate(&data), calculate(&data));
    }
}
