//! Byte pipe to the ETHM-1 module
//!
//! The module serves a single request per TCP connection, so a
//! [`Transport`] is connected before every command and disconnected once the
//! reply (or an error) is in. Framing and checksums live in `integra-core`;
//! this crate only moves bytes.

pub mod tcp;
pub mod error;

pub use error::{Error, Result};
pub use tcp::TcpTransport;

use async_trait::async_trait;
use bytes::BytesMut;

/// Connection to an ETHM-1 module
#[async_trait]
pub trait Transport: Send + Sync {
    /// Open a new connection
    ///
    /// A connection still open from an earlier, abandoned request is closed
    /// and replaced; the module never sees two requests on one socket.
    async fn connect(&mut self) -> Result<()>;
    
    /// Close the connection, if any
    async fn disconnect(&mut self) -> Result<()>;
    
    fn is_connected(&self) -> bool;
    
    /// Write one encoded frame
    async fn send(&mut self, data: &[u8]) -> Result<()>;
    
    /// Single read of at most `max_len` bytes, bounded by the read timeout
    async fn receive(&mut self, max_len: usize) -> Result<BytesMut>;
    
    /// `host:port` of the module, for logging
    fn remote_addr(&self) -> String;
}
