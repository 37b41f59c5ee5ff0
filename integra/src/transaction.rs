//! Single command transaction with busy retry
//!
//! Every attempt opens a fresh connection, sends the frame, reads one
//! response and closes the connection. A busy reply is retried after
//! `base_delay * attempt`; once attempts run out the last reply is validated
//! like any other, which fails on its header.

use std::time::Duration;

use bytes::{Bytes, BytesMut};
use tokio::time::sleep;
use tracing::{debug, warn};

use integra_core::{
    constants::{DEFAULT_RETRY_DELAY_MS, MAX_ATTEMPTS, MAX_RESPONSE_LEN},
    frame, response, Command,
};
use integra_transport::{TcpTransport, Transport};

use crate::config::ClientConfig;
use crate::error::Result;

/// Executes commands over a [`Transport`]
pub struct TransactionClient {
    transport: Box<dyn Transport>,
    max_attempts: usize,
    base_delay: Duration,
    max_response_len: usize,
}

impl TransactionClient {
    /// Create a client over `transport` with default retry settings
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            max_attempts: MAX_ATTEMPTS,
            base_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            max_response_len: MAX_RESPONSE_LEN,
        }
    }
    
    /// Create a TCP client from `config`
    pub fn from_config(config: &ClientConfig) -> Self {
        let transport = TcpTransport::new(config.host.clone(), config.port)
            .with_connect_timeout(config.connect_timeout)
            .with_read_timeout(config.read_timeout);
        
        Self::with_transport(config, Box::new(transport))
    }
    
    /// Create a client from `config` over a custom transport
    pub fn with_transport(config: &ClientConfig, transport: Box<dyn Transport>) -> Self {
        Self::new(transport)
            .with_max_attempts(config.max_attempts)
            .with_base_delay(config.base_delay)
            .with_max_response_len(config.max_response_len)
    }
    
    /// Set attempts per command (at least one is always made)
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }
    
    /// Set busy retry delay unit
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }
    
    /// Set bytes read per response
    pub fn with_max_response_len(mut self, len: usize) -> Self {
        self.max_response_len = len;
        self
    }
    
    /// Get remote address
    pub fn remote_addr(&self) -> String {
        self.transport.remote_addr()
    }
    
    /// Send `command` and return the validated response data
    ///
    /// # Errors
    ///
    /// Transport failures are returned on first occurrence. Protocol errors
    /// (framing, wrong opcode, device status, checksum) come from
    /// [`response::validate`] and are never retried.
    pub async fn execute(&mut self, command: &Command) -> Result<Bytes> {
        let frame = frame::encode(command.as_bytes());
        debug!(
            "Sending command: {}, length: {}",
            hex::encode_upper(&frame),
            frame.len()
        );
        
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        
        let raw = loop {
            let raw = self.exchange(&frame).await?;
            debug!(
                "Response received: {}, length: {}",
                hex::encode_upper(&raw),
                raw.len()
            );
            
            if !response::is_busy(&raw) {
                break raw;
            }
            
            if attempt >= attempts {
                warn!("Module still busy after {} attempts", attempts);
                break raw;
            }
            
            let delay = self.base_delay * attempt as u32;
            warn!(attempt, "Module busy, retrying in {:?}", delay);
            sleep(delay).await;
            attempt += 1;
        };
        
        Ok(response::validate(&raw, command.opcode())?)
    }
    
    /// One connect, send, receive, disconnect cycle
    ///
    /// A connection left open by a cancelled call is closed first, so every
    /// attempt starts on a fresh connection.
    async fn exchange(&mut self, frame: &[u8]) -> Result<BytesMut> {
        if self.transport.is_connected() {
            debug!("Closing stale connection to {}", self.transport.remote_addr());
            if let Err(e) = self.transport.disconnect().await {
                warn!("Failed to close stale connection: {}", e);
            }
        }
        
        self.transport.connect().await?;
        
        let result = self.send_receive(frame).await;
        
        if let Err(e) = self.transport.disconnect().await {
            warn!("Failed to close connection: {}", e);
        }
        
        result
    }
    
    async fn send_receive(&mut self, frame: &[u8]) -> Result<BytesMut> {
        self.transport.send(frame).await?;
        Ok(self.transport.receive(self.max_response_len).await?)
    }
}
