//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] integra_core::Error),
    
    #[error("Transport error: {0}")]
    Transport(#[from] integra_transport::Error),
    
    #[error("Type error: {0}")]
    Types(#[from] integra_types::Error),
    
    #[error("Invalid response from panel: {0}")]
    InvalidResponse(String),
    
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Underlying protocol error, if any
    pub fn as_core(&self) -> Option<&integra_core::Error> {
        match self {
            Self::Core(e) => Some(e),
            _ => None,
        }
    }
}
