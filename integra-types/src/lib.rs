//! Type definitions for integra

pub mod error;
pub mod object_kind;
pub mod version;

pub use error::{Error, Result};
pub use object_kind::ObjectKind;
pub use version::{HardwareModel, Language, PanelVersion};
