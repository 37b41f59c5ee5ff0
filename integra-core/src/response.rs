//! Response validation
//!
//! A response body (after [`frame::decode`]) is either
//!
//! ```text
//! opcode echo | data ...          | checksum (BE u16)
//! EF          | status            | checksum (BE u16)
//! ```
//!
//! where status `FF` means "accepted, processing" and `00` means "OK".

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;
use tracing::{debug, trace};

use crate::{
    checksum,
    command::Opcode,
    constants::{status, BUSY},
    error::{Error, Result},
    frame,
};

/// Opcode byte plus checksum
const MIN_OUTPUT_SIZE: usize = 3;

/// Check whether a raw response is the module's busy reply
pub fn is_busy(raw: &[u8]) -> bool {
    raw.starts_with(&BUSY)
}

/// Validate a raw response to a command with `opcode`
///
/// Returns the response data, without the leading opcode/status byte and
/// the trailing checksum.
///
/// # Errors
///
/// - [`Error::Framing`] if the envelope is wrong or the body too short
/// - [`Error::Device`] if a result frame carries an error status
/// - [`Error::ProtocolMismatch`] if the echoed opcode is not `opcode`
/// - [`Error::ChecksumMismatch`] if the trailing checksum is wrong
///
/// # Examples
///
/// ```
/// use integra_core::{frame, response};
///
/// let raw = frame::encode(&[0x7E, 0x03]);
/// let data = response::validate(&raw, 0x7E).unwrap();
/// assert_eq!(&data[..], &[0x03]);
/// ```
pub fn validate(raw: &[u8], opcode: u8) -> Result<Bytes> {
    let output = frame::decode(raw)?;
    
    debug!("Output: {:02X?}", &output[..]);
    
    if output.len() < MIN_OUTPUT_SIZE {
        return Err(Error::framing(format!(
            "response too short: expected at least {} bytes, got {} bytes",
            MIN_OUTPUT_SIZE,
            output.len()
        )));
    }
    
    if output[0] == u8::from(Opcode::Result) {
        if output.len() < MIN_OUTPUT_SIZE + 1 {
            return Err(Error::framing("result frame without status byte"));
        }
        
        let code = output[1];
        debug!(status = format!("0x{:02X}", code), "Result frame");
        
        if code != status::PROCESSING && code != status::OK {
            return Err(Error::Device { status: code });
        }
    } else if output[0] != opcode {
        return Err(Error::ProtocolMismatch {
            expected: opcode,
            actual: output[0],
        });
    }
    
    let (data, trailer) = output.split_at(output.len() - 2);
    let received = BigEndian::read_u16(trailer);
    let expected = checksum::calculate(data);
    
    if received != expected {
        return Err(Error::ChecksumMismatch { expected, received });
    }
    
    trace!("Response data: {:02X?}", &data[1..]);
    
    Ok(Bytes::copy_from_slice(&data[1..]))
}
