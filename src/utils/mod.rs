//! Utility modules
//!
//! - Error and warning types
//! - Loading tabular input (TSV, CSV, JSON) for the array exporter

pub mod error;

#[cfg(feature = "data-loading")]
pub mod loader;

// Re-export commonly used items
pub use error::{CodecError, CodecResult, CodecWarning, WarningKind};

#[cfg(feature = "data-loading")]
pub use loader::{load_rows, InputFormat, Rows};
