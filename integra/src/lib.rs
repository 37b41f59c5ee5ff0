//! # integra
//!
//! Rust implementation of the Satel Integra integration protocol, spoken by
//! the ETHM-1 network module.
//!
//! ## Features
//!
//! - Type-safe protocol implementation
//! - Async/await API using Tokio
//! - Busy-aware request/response transactions
//! - Event log and device name decoding
//!
//! ## Quick Start
//!
//! ```no_run
//! use integra::{ClientConfig, Panel};
//!
//! #[tokio::main]
//! async fn main() -> integra::Result<()> {
//!     let mut panel = Panel::new(ClientConfig::new("192.168.1.100"));
//!     
//!     // Get panel version
//!     let version = panel.get_version().await?;
//!     println!("{}", version);
//!     
//!     // Read the most recent event
//!     let event = panel.get_latest_event().await?;
//!     println!("{}", event);
//!     
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod panel;
pub mod transaction;

#[cfg(test)]
pub(crate) mod mock;

// Re-exports
pub use cache::NameCache;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use panel::Panel;
pub use transaction::TransactionClient;

// Re-export types
pub use integra_core::{Command, EventRecord, NameRecord, Opcode};
pub use integra_types::{ObjectKind, PanelVersion};
