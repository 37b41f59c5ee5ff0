//! User code encoding
//!
//! Commands that act on behalf of a user carry the access code as 8 bytes of
//! packed decimal digits, one digit per nibble, padded with `0xFF`.

use crate::error::{Error, Result};

/// Encoded user code length
pub const USER_CODE_LEN: usize = 8;

/// Pack the decimal digits of `value` two per byte, a trailing odd digit gets a `0` nibble
fn pack_digits(value: u64) -> Vec<u8> {
    let digits: Vec<u8> = value.to_string().bytes().map(|d| d - b'0').collect();
    
    digits
        .chunks(2)
        .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(0))
        .collect()
}

/// Encode a user code, optionally preceded by a prefix
///
/// A prefix of `0` means no prefix, same as `None`.
///
/// # Errors
///
/// Returns [`Error::UserCodeTooLong`] if prefix and code need more than 8 bytes.
///
/// # Examples
///
/// ```
/// use integra_core::user_code;
///
/// let code = user_code::format(1234, Some(97)).unwrap();
/// assert_eq!(code, [0x97, 0x12, 0x34, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
/// ```
pub fn format(code: u64, prefix: Option<u64>) -> Result<[u8; USER_CODE_LEN]> {
    let mut packed = prefix
        .filter(|&p| p != 0)
        .map(pack_digits)
        .unwrap_or_default();
    packed.extend(pack_digits(code));
    
    if packed.len() > USER_CODE_LEN {
        return Err(Error::UserCodeTooLong { len: packed.len() });
    }
    
    let mut buf = [0xFF; USER_CODE_LEN];
    buf[..packed.len()].copy_from_slice(&packed);
    
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    
    #[test]
    fn test_format_code() {
        assert_eq!(
            format(1234, None).unwrap(),
            [0x12, 0x34, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }
    
    #[test]
    fn test_format_code_with_prefix() {
        assert_eq!(
            format(1234, Some(97)).unwrap(),
            [0x97, 0x12, 0x34, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }
    
    #[test]
    fn test_format_zero_prefix_ignored() {
        assert_eq!(format(1234, Some(0)).unwrap(), format(1234, None).unwrap());
    }
    
    #[test]
    fn test_format_odd_digits() {
        assert_eq!(
            format(12345, None).unwrap(),
            [0x12, 0x34, 0x50, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }
    
    #[test]
    fn test_format_full_length() {
        assert_eq!(
            format(1234567890123456, None).unwrap(),
            [0x12, 0x34, 0x56, 0x78, 0x90, 0x12, 0x34, 0x56]
        );
    }
    
    #[test]
    fn test_format_too_long() {
        assert!(matches!(
            format(12345678901234567, None),
            Err(Error::UserCodeTooLong { len: 9 })
        ));
        assert!(format(12345678, Some(123456789)).is_err());
    }
}
