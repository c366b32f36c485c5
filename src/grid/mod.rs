//! Grid collaborator types
//!
//! This module contains the boundary between the codec and the grid it
//! reads from or configures:
//! - `GridView`: the read-only interface the exporter consumes
//! - `GridSettings`: the descriptor the importer produces
//! - `MemoryGrid`: an owned grid implementing `GridView`

pub mod memory;
pub mod settings;
pub mod view;

// Re-export commonly used types
pub use memory::{column_label, MemoryGrid};
pub use settings::{GridSettings, HeaderLabel, MergeCell};
pub use view::{CellMeta, GridView, Selection};
