//! Object kinds used to address name and status queries

use std::fmt;

use crate::error::{Error, Result};

/// Kind of panel object
///
/// The same codes are used in the device-name command (`0xEE`) request and
/// in the type byte of its response.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ObjectKind {
    Partition = 0,
    Zone = 1,
    User = 2,
    Expander = 3,
    Output = 4,
    ZoneWithPartition = 5,
    Timer = 6,
    Telephone = 7,
    Object = 15,
    PartitionWithObject = 16,
    OutputWithDuration = 17,
    PartitionWithObjectAndOptions = 18,
}

impl ObjectKind {
    /// Wire code of this kind
    pub fn code(self) -> u8 {
        self as u8
    }
    
    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Partition => "partition",
            Self::Zone => "zone",
            Self::User => "user",
            Self::Expander => "expander/LCD",
            Self::Output => "output",
            Self::ZoneWithPartition => "zone with partition",
            Self::Timer => "timer",
            Self::Telephone => "telephone",
            Self::Object => "object",
            Self::PartitionWithObject => "partition with object",
            Self::OutputWithDuration => "output with duration",
            Self::PartitionWithObjectAndOptions => "partition with object and options",
        }
    }
    
    /// Name for a raw type code, `"Unknown"` when the code is not in the table
    pub fn name_for_code(code: u8) -> &'static str {
        Self::try_from(code).map(Self::name).unwrap_or("Unknown")
    }
}

impl From<ObjectKind> for u8 {
    fn from(kind: ObjectKind) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for ObjectKind {
    type Error = Error;
    
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Partition),
            1 => Ok(Self::Zone),
            2 => Ok(Self::User),
            3 => Ok(Self::Expander),
            4 => Ok(Self::Output),
            5 => Ok(Self::ZoneWithPartition),
            6 => Ok(Self::Timer),
            7 => Ok(Self::Telephone),
            15 => Ok(Self::Object),
            16 => Ok(Self::PartitionWithObject),
            17 => Ok(Self::OutputWithDuration),
            18 => Ok(Self::PartitionWithObjectAndOptions),
            _ => Err(Error::UnknownObjectKind(value)),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
