//! Errors raised while talking to the ETHM-1 module
//!
//! None of these are retried by the client; a busy module is the only
//! condition that triggers another attempt, and that arrives as data.

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `send` or `receive` called without an open connection
    #[error("No open connection to the module")]
    NotConnected,
    
    /// TCP connect did not finish within the connect timeout
    #[error("Timed out connecting to the module")]
    ConnectionTimeout,
    
    /// Module sent nothing within the read timeout
    #[error("Timed out waiting for the module to answer")]
    ReadTimeout,
    
    /// Module closed the socket before answering (zero-byte read)
    #[error("Module closed the connection")]
    ConnectionClosed,
    
    /// Socket level failure (refused, reset, broken pipe)
    #[error("Socket error: {0}")]
    Io(#[from] io::Error),
    
    /// Host and port did not resolve to any socket address
    #[error("Cannot resolve module address: {0}")]
    InvalidAddress(String),
}
