//! Integration protocol commands

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::LATEST_EVENT;
use crate::error::{Error, Result};

/// Protocol opcodes
///
/// Only the read commands used by this crate are listed; any other opcode
/// can still be sent through [`Command::from_bytes`] or [`Command::from_hex`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    // State queries (bitset replies)
    ViolatedZones = 0x00,
    ArmedPartitions = 0x0A,
    ActiveOutputs = 0x17,
    
    // Panel information
    ReadTime = 0x1A,
    Version = 0x7E,
    
    // Event log
    ReadEvent = 0x8C,
    
    // Names
    DeviceName = 0xEE,
    
    // Result frame (from module)
    Result = 0xEF,
}

impl Opcode {
    /// Get opcode name
    pub fn name(self) -> &'static str {
        match self {
            Self::ViolatedZones => "ZONES_VIOLATION",
            Self::ArmedPartitions => "ARMED_PARTITIONS",
            Self::ActiveOutputs => "OUTPUTS_STATE",
            Self::ReadTime => "READ_RTC",
            Self::Version => "INTEGRA_VERSION",
            Self::ReadEvent => "READ_EVENT",
            Self::DeviceName => "READ_DEVICE_NAME",
            Self::Result => "RESULT",
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> u8 {
        op as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = Error;
    
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(Self::ViolatedZones),
            0x0A => Ok(Self::ArmedPartitions),
            0x17 => Ok(Self::ActiveOutputs),
            0x1A => Ok(Self::ReadTime),
            0x7E => Ok(Self::Version),
            0x8C => Ok(Self::ReadEvent),
            0xEE => Ok(Self::DeviceName),
            0xEF => Ok(Self::Result),
            _ => Err(Error::UnknownOpcode(value)),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), *self as u8)
    }
}

/// A command: opcode byte followed by its arguments
///
/// Immutable once built. The checksum and framing are added by
/// [`crate::frame::encode`].
///
/// # Examples
///
/// ```
/// use integra_core::{Command, Opcode};
///
/// let cmd = Command::new(Opcode::DeviceName, [0x01, 0x05]);
/// assert_eq!(cmd.to_hex(), "EE0105");
/// assert_eq!(cmd.opcode(), 0xEE);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Command {
    bytes: Bytes,
}

impl Command {
    /// Build a command from an opcode and its arguments
    pub fn new(opcode: Opcode, args: impl AsRef<[u8]>) -> Self {
        let args = args.as_ref();
        let mut buf = BytesMut::with_capacity(1 + args.len());
        buf.put_u8(opcode.into());
        buf.put_slice(args);
        
        Self { bytes: buf.freeze() }
    }
    
    /// Wrap raw command bytes (opcode first)
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::InvalidCommand("empty command".into()));
        }
        Ok(Self { bytes })
    }
    
    /// Parse a command from its hexadecimal form, e.g. `"EE0105"`
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| Error::InvalidCommand(format!("{}: {}", hex_str, e)))?;
        Self::from_bytes(bytes)
    }
    
    fn bare(opcode: Opcode) -> Self {
        Self {
            bytes: Bytes::copy_from_slice(&[opcode.into()]),
        }
    }
    
    /// Read zones violation bitmap
    pub fn violated_zones() -> Self {
        Self::bare(Opcode::ViolatedZones)
    }
    
    /// Read armed partitions bitmap
    pub fn armed_partitions() -> Self {
        Self::bare(Opcode::ArmedPartitions)
    }
    
    /// Read outputs state bitmap
    pub fn active_outputs() -> Self {
        Self::bare(Opcode::ActiveOutputs)
    }
    
    /// Read panel clock
    pub fn read_time() -> Self {
        Self::bare(Opcode::ReadTime)
    }
    
    /// Read panel version
    pub fn version() -> Self {
        Self::bare(Opcode::Version)
    }
    
    /// Read device name of `kind`/`number`
    pub fn device_name(kind: u8, number: u8) -> Self {
        Self::new(Opcode::DeviceName, [kind, number])
    }
    
    /// Read event at `index`; [`LATEST_EVENT`] selects the most recent one
    pub fn read_event(index: [u8; 3]) -> Self {
        Self::new(Opcode::ReadEvent, index)
    }
    
    /// Read the most recent event
    pub fn latest_event() -> Self {
        Self::read_event(LATEST_EVENT)
    }
    
    /// Opcode byte
    pub fn opcode(&self) -> u8 {
        self.bytes[0]
    }
    
    /// Arguments following the opcode
    pub fn args(&self) -> &[u8] {
        &self.bytes[1..]
    }
    
    /// Raw command bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
    
    /// Uppercase hexadecimal form
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.bytes)
    }
}

impl AsRef<[u8]> for Command {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("opcode", &format!("0x{:02X}", self.opcode()))
            .field("args", &hex::encode_upper(self.args()))
            .finish()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Opcode::try_from(self.opcode()) {
            Ok(op) => write!(f, "{}[{}]", op.name(), self.to_hex()),
            Err(_) => write!(f, "CMD[{}]", self.to_hex()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_opcode_conversion() {
        assert_eq!(u8::from(Opcode::ReadEvent), 0x8C);
        assert_eq!(Opcode::try_from(0xEE).unwrap(), Opcode::DeviceName);
    }
    
    #[test]
    fn test_unknown_opcode() {
        assert!(matches!(Opcode::try_from(0x91), Err(Error::UnknownOpcode(0x91))));
    }
    
    #[test]
    fn test_command_builders() {
        assert_eq!(Command::device_name(1, 5).as_bytes(), &[0xEE, 0x01, 0x05]);
        assert_eq!(Command::latest_event().to_hex(), "8CFFFFFF");
        assert_eq!(Command::version().as_bytes(), &[0x7E]);
    }
    
    #[test]
    fn test_command_from_hex() {
        let cmd = Command::from_hex("8c0668de").unwrap();
        assert_eq!(cmd.opcode(), 0x8C);
        assert_eq!(cmd.args(), &[0x06, 0x68, 0xDE]);
        assert_eq!(cmd.to_string(), "READ_EVENT[8C0668DE]");
    }
    
    #[test]
    fn test_command_invalid() {
        assert!(Command::from_hex("zz").is_err());
        assert!(Command::from_hex("").is_err());
    }
}
