//! Protocol constants

/// Frame header
pub const HEADER: [u8; 2] = [0xFE, 0xFE];

/// Frame footer
pub const FOOTER: [u8; 2] = [0xFE, 0x0D];

/// Escape byte; every occurrence inside a frame body is followed by [`ESCAPE_SUFFIX`]
pub const ESCAPE: u8 = 0xFE;

/// Second byte of an escaped [`ESCAPE`]
pub const ESCAPE_SUFFIX: u8 = 0xF0;

/// Reply sent by the module when a command arrives too early ("\x10Busy!\r\n")
pub const BUSY: [u8; 8] = [0x10, 0x42, 0x75, 0x73, 0x79, 0x21, 0x0D, 0x0A];

/// Initial value of the running checksum
pub const CHECKSUM_SEED: u16 = 0x147A;

/// Default ETHM-1 integration port
pub const DEFAULT_PORT: u16 = 7094;

/// Default delay unit between busy retries (milliseconds)
pub const DEFAULT_RETRY_DELAY_MS: u64 = 2;

/// Maximum attempts per command
pub const MAX_ATTEMPTS: usize = 3;

/// Maximum number of bytes read as a single response
pub const MAX_RESPONSE_LEN: usize = 100;

/// Default connection timeout (seconds)
pub const DEFAULT_TIMEOUT: u64 = 5;

/// Default read timeout (seconds)
pub const DEFAULT_READ_TIMEOUT: u64 = 5;

/// Status bytes carried by a result (`0xEF`) frame
pub mod status {
    /// Command accepted, will be processed
    pub const PROCESSING: u8 = 0xFF;
    
    /// OK
    pub const OK: u8 = 0x00;
}

/// Index selecting the most recent event in the event log
pub const LATEST_EVENT: [u8; 3] = [0xFF, 0xFF, 0xFF];
