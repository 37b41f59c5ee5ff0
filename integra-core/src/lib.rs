//! # integra-core
//!
//! Core protocol implementation for the Satel Integra integration protocol.
//!
//! This crate provides the low-level protocol primitives:
//! - Checksum calculation
//! - Frame encoding/decoding and byte escaping
//! - Response validation
//! - Command definitions
//! - Bitset and user code codecs
//! - Event and name record decoders

pub mod bitset;
pub mod checksum;
pub mod command;
pub mod constants;
pub mod error;
pub mod frame;
pub mod record;
pub mod response;
pub mod user_code;

pub use command::{Command, Opcode};
pub use error::{Error, Result};
pub use record::{EventRecord, NameRecord};

/// Default module port
pub const DEFAULT_PORT: u16 = constants::DEFAULT_PORT;
