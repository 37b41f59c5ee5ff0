//! Frame encoding/decoding
//!
//! # Frame Structure
//!
//! ```text
//! ┌─────────────┬──────────────────────────────────────────┬─────────────┐
//! │   Header    │   escaped( Command | Checksum )          │   Footer    │
//! │  FE FE      │   N bytes + 2 bytes (BE u16)             │  FE 0D      │
//! └─────────────┴──────────────────────────────────────────┴─────────────┘
//! ```
//!
//! Inside the body every `FE` is sent as `FE F0`. Header and footer are
//! never escaped, so the footer is located on the raw bytes before the body
//! is unescaped.

use bytes::{BufMut, BytesMut};
use tracing::trace;

use crate::{
    checksum,
    constants::{ESCAPE, ESCAPE_SUFFIX, FOOTER, HEADER},
    error::{Error, Result},
};

/// Smallest valid frame: header and footer around an empty body
pub const MIN_FRAME_SIZE: usize = HEADER.len() + FOOTER.len();

/// Escape every `FE` as `FE F0`
pub fn escape(data: &[u8]) -> BytesMut {
    let mut buf = BytesMut::with_capacity(data.len() + 4);
    
    for &b in data {
        buf.put_u8(b);
        if b == ESCAPE {
            buf.put_u8(ESCAPE_SUFFIX);
        }
    }
    
    buf
}

/// Reverse [`escape`], scanning left to right
///
/// A lone `FE` not followed by `F0` is kept as is.
pub fn unescape(data: &[u8]) -> BytesMut {
    let mut buf = BytesMut::with_capacity(data.len());
    let mut iter = data.iter().copied().peekable();
    
    while let Some(b) = iter.next() {
        buf.put_u8(b);
        if b == ESCAPE && iter.peek() == Some(&ESCAPE_SUFFIX) {
            iter.next();
        }
    }
    
    buf
}

/// Encode a command into a wire frame
///
/// # Examples
///
/// ```
/// use integra_core::frame;
///
/// let encoded = frame::encode(&[0x09]);
/// assert_eq!(&encoded[..], &[0xFE, 0xFE, 0x09, 0xD7, 0xEB, 0xFE, 0x0D]);
/// ```
pub fn encode(command: &[u8]) -> BytesMut {
    let mut body = BytesMut::with_capacity(command.len() + 2);
    body.put_slice(command);
    body.put_u16(checksum::calculate(command));
    
    let body = escape(&body);
    
    let mut buf = BytesMut::with_capacity(MIN_FRAME_SIZE + body.len());
    buf.put_slice(&HEADER);
    buf.put_slice(&body);
    buf.put_slice(&FOOTER);
    
    trace!("Encoded frame: {:02X?}", &buf[..]);
    
    buf
}

/// Decode a wire frame into its unescaped body
///
/// The body still carries its trailing checksum; see
/// [`crate::response::validate`] for the full response check.
///
/// # Errors
///
/// Returns [`Error::Framing`] if the frame is shorter than header plus footer,
/// or either delimiter does not match.
pub fn decode(raw: &[u8]) -> Result<BytesMut> {
    if raw.len() < MIN_FRAME_SIZE {
        return Err(Error::framing(format!(
            "frame too short: expected at least {} bytes, got {} bytes",
            MIN_FRAME_SIZE,
            raw.len()
        )));
    }
    
    let (head, rest) = raw.split_at(HEADER.len());
    if head != HEADER {
        return Err(Error::framing(format!(
            "wrong header - got {}",
            hex::encode_upper(head)
        )));
    }
    
    let (body, tail) = rest.split_at(rest.len() - FOOTER.len());
    if tail != FOOTER {
        return Err(Error::framing(format!(
            "wrong footer - got {}",
            hex::encode_upper(tail)
        )));
    }
    
    Ok(unescape(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    
    #[test]
    fn test_encode_plain() {
        let encoded = encode(&hex::decode("09").unwrap());
        assert_eq!(hex::encode_upper(&encoded), "FEFE09D7EBFE0D");
    }
    
    #[test]
    fn test_encode_escapes_checksum() {
        // Checksum of 1C is D7FE, its low byte gets escaped
        let encoded = encode(&hex::decode("1C").unwrap());
        assert_eq!(hex::encode_upper(&encoded), "FEFE1CD7FEF0FE0D");
    }
    
    #[test]
    fn test_escape_only_body() {
        let encoded = encode(&[0xFE]);
        assert_eq!(&encoded[..4], &[0xFE, 0xFE, 0xFE, 0xF0]);
        assert_eq!(&encoded[encoded.len() - 2..], &FOOTER);
    }
    
    #[test]
    fn test_decode_roundtrip() {
        let command = [0xEE, 0xFE, 0x0D, 0x01];
        let encoded = encode(&command);
        let decoded = decode(&encoded).unwrap();
        
        assert_eq!(&decoded[..command.len()], &command);
        assert_eq!(decoded.len(), command.len() + 2);
    }
    
    #[test]
    fn test_decode_escaped_footer_in_body() {
        // Body contains FE F0 0D which must not terminate the frame early
        let raw = [0xFE, 0xFE, 0x01, 0xFE, 0xF0, 0x0D, 0x02, 0xFE, 0x0D];
        let decoded = decode(&raw).unwrap();
        
        assert_eq!(&decoded[..], &[0x01, 0xFE, 0x0D, 0x02]);
    }
    
    #[test]
    fn test_decode_wrong_header() {
        let raw = [0x10, 0x42, 0x75, 0x73, 0x79, 0x21, 0x0D, 0x0A];
        let err = decode(&raw).unwrap_err();
        
        assert!(err.is_framing());
        assert!(err.to_string().contains("header"));
    }
    
    #[test]
    fn test_decode_wrong_footer() {
        let raw = [0xFE, 0xFE, 0x09, 0xD7, 0xEB, 0xFE, 0x0A];
        let err = decode(&raw).unwrap_err();
        
        assert!(err.to_string().contains("footer"));
    }
    
    #[test]
    fn test_decode_too_short() {
        assert!(decode(&[0xFE, 0xFE, 0xFE]).unwrap_err().is_framing());
        assert!(decode(&[]).is_err());
    }
    
    #[test]
    fn test_unescape_lone_escape_byte() {
        assert_eq!(&unescape(&[0xFE, 0x01])[..], &[0xFE, 0x01]);
        assert_eq!(&unescape(&[0xFE, 0xF0, 0xF0])[..], &[0xFE, 0xF0]);
    }
    
    proptest! {
        #[test]
        fn prop_unescape_reverses_escape(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            prop_assert_eq!(&unescape(&escape(&data))[..], &data[..]);
        }
        
        #[test]
        fn prop_encoded_body_has_no_bare_escape(data in proptest::collection::vec(any::<u8>(), 1..64)) {
            let encoded = encode(&data);
            let body = &encoded[HEADER.len()..encoded.len() - FOOTER.len()];
            let mut i = 0;
            while i < body.len() {
                if body[i] == ESCAPE {
                    prop_assert_eq!(body.get(i + 1), Some(&ESCAPE_SUFFIX));
                    i += 2;
                } else {
                    i += 1;
                }
            }
        }
    }
}
