//! Client configuration

use std::time::Duration;

use encoding_rs::{Encoding, WINDOWS_1250};
use integra_core::constants::{
    DEFAULT_PORT, DEFAULT_READ_TIMEOUT, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT, MAX_ATTEMPTS,
    MAX_RESPONSE_LEN,
};

use crate::error::{Error, Result};

/// Connection and retry settings for a [`crate::Panel`] client
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use integra::ClientConfig;
///
/// let config = ClientConfig::new("192.168.1.100")
///     .with_max_attempts(5)
///     .with_base_delay(Duration::from_millis(10));
/// assert_eq!(config.port, 7094);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Module host name or address
    pub host: String,
    
    /// Integration port
    pub port: u16,
    
    /// Codepage of device names
    pub encoding: &'static Encoding,
    
    /// Delay unit between busy retries; attempt `n` waits `n * base_delay`
    pub base_delay: Duration,
    
    /// Attempts per command while the module answers busy
    pub max_attempts: usize,
    
    pub connect_timeout: Duration,
    
    pub read_timeout: Duration,
    
    /// Bytes read as a single response
    pub max_response_len: usize,
}

impl ClientConfig {
    /// Create a configuration with default settings
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            encoding: WINDOWS_1250,
            base_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            max_attempts: MAX_ATTEMPTS,
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT),
            max_response_len: MAX_RESPONSE_LEN,
        }
    }
    
    /// Build a configuration from `INTEGRA_HOST`, `INTEGRA_PORT` and `INTEGRA_ENCODING`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("INTEGRA_HOST")
            .ok_or_else(|| Error::Config("INTEGRA_HOST is not set".into()))?;
        
        let mut config = Self::new(host);
        
        if let Some(port) = lookup("INTEGRA_PORT") {
            config.port = port
                .parse()
                .map_err(|e| Error::Config(format!("INTEGRA_PORT={}: {}", port, e)))?;
        }
        
        if let Some(label) = lookup("INTEGRA_ENCODING") {
            config.encoding = encoding_for_label(&label)?;
        }
        
        Ok(config)
    }
    
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
    
    /// Set the codepage used to decode device names
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }
    
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }
    
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }
    
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
    
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
    
    pub fn with_max_response_len(mut self, len: usize) -> Self {
        self.max_response_len = len;
        self
    }
}

/// Resolve a codepage label such as `cp1250` or `windows-1252`
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::Config(format!("unknown encoding: {}", label)))
}
