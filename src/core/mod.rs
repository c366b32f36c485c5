//! Core codec modules
//!
//! - `codec`: cell-text escaping shared by both directions
//! - `export`: grid window to clipboard HTML
//! - `import`: clipboard HTML to grid settings

pub mod codec;
pub mod export;
pub mod import;

pub use codec::{decode_html_entities, encode_cell_value, encode_html_entities};

pub use export::{
    array_to_table, export_range, export_selection, instance_to_html, ExportOptions,
};

pub use import::{
    import_table, import_table_with_diagnostics, import_table_with_options, Dialect,
    ImportOptions, ImportOutput,
};
