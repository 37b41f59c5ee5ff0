//! Error types for integra-core



/// Result type alias for integra operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Frame envelope is malformed (header, footer or length)
    #[error("Framing error: {reason}")]
    Framing {
        reason: String,
    },
    
    /// Response echoes a different opcode than the one sent
    #[error("Response to a wrong command: expected 0x{expected:02X}, got 0x{actual:02X}")]
    ProtocolMismatch {
        expected: u8,
        actual: u8,
    },
    
    /// Module reported an error status in a result frame
    #[error("Device reported error code 0x{status:02X}")]
    Device {
        status: u8,
    },
    
    /// Checksum verification failed
    #[error("Checksum mismatch: expected 0x{expected:04X}, received 0x{received:04X}")]
    ChecksumMismatch {
        expected: u16,
        received: u16,
    },
    
    /// Unknown opcode
    #[error("Unknown opcode: 0x{0:02X}")]
    UnknownOpcode(u8),
    
    /// Command could not be built
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    
    /// Bit position does not fit the requested buffer
    #[error("Bit position {position} outside {first}..={last}")]
    BitOutOfRange {
        position: u32,
        first: u32,
        last: u32,
    },
    
    /// Encoded user code (with prefix) is longer than 8 bytes
    #[error("User code too long: {len} bytes (max: 8 bytes)")]
    UserCodeTooLong {
        len: usize,
    },
}

impl Error {
    pub(crate) fn framing(reason: impl Into<String>) -> Self {
        Self::Framing { reason: reason.into() }
    }
    
    /// Check if error comes from a malformed frame envelope
    pub fn is_framing(&self) -> bool {
        matches!(self, Self::Framing { .. })
    }
}
