//! # gridclip
//!
//! Clipboard HTML codec for spreadsheet grids.
//!
//! ## Features
//!
//! - **Export**: serializes a selection of a grid (cells, merged regions,
//!   nested column headers, row headers) into the `<table>` markup Excel,
//!   LibreOffice and Google Sheets accept on paste
//! - **Import**: rebuilds data, merges, headers and fixed rows from pasted
//!   markup, including Excel's whitespace quirks
//! - **Escaping**: line breaks, space runs and tabs survive the round trip
//! - **WASM Support**: compiles to WebAssembly for browser clipboards
//!
//! ## Usage Examples
//!
//! ### Exporting rows
//!
//! ```rust
//! use gridclip::array_to_table;
//!
//! let html = array_to_table(vec![vec!["a & b", "c"]]);
//! assert_eq!(html, "<table><tbody><tr><td>a &amp; b</td><td>c</td></tr></tbody></table>");
//! ```
//!
//! ### Round trip through a grid
//!
//! ```rust
//! use gridclip::{import_table, instance_to_html, MemoryGrid};
//!
//! let grid = MemoryGrid::from_rows(vec![vec!["1", "2"], vec!["3", "4"]])
//!     .with_col_headers(["A", "B"]);
//! let html = instance_to_html(&grid);
//!
//! let settings = import_table(&html).unwrap();
//! assert_eq!(settings.col_headers, Some(vec!["A".to_string(), "B".to_string()]));
//! assert_eq!(settings.row_count(), 2);
//! ```

/// Core codec modules
pub mod core;

/// Data layer - entity table and markup constants
pub mod data;

/// Grid abstractions consumed and produced by the codec
pub mod grid;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core modules
pub use core::codec;
pub use core::export;
pub use core::import;

pub use core::codec::{decode_html_entities, encode_html_entities};
pub use core::export::{
    array_to_table, export_range, export_selection, instance_to_html, ExportOptions,
};
pub use core::import::{
    import_table, import_table_with_diagnostics, import_table_with_options, Dialect,
    ImportOptions, ImportOutput,
};

// Re-export grid types
pub use grid::{CellMeta, GridSettings, GridView, HeaderLabel, MemoryGrid, MergeCell, Selection};

// Re-export utilities
pub use utils::error::{CodecError, CodecResult, CodecWarning, WarningKind};

/// Guess what kind of clipboard payload `input` is.
///
/// Returns `"html"` when it contains a table, `"json"` for a JSON array,
/// `"tsv"` or `"csv"` for delimited text and `"unknown"` for blank input.
pub fn detect_format(input: &str) -> &'static str {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return "unknown";
    }

    if is_html_table(input) {
        "html"
    } else if trimmed.starts_with('[') {
        "json"
    } else if input.contains('\t') || !input.contains(',') {
        "tsv"
    } else {
        "csv"
    }
}

/// Whether `input` contains a `<table` start tag (case-insensitive)
pub fn is_html_table(input: &str) -> bool {
    input
        .as_bytes()
        .windows(6)
        .any(|window| window.eq_ignore_ascii_case(b"<table"))
}

/// Export plain rows after loading them from TSV, CSV or JSON text
#[cfg(feature = "data-loading")]
pub fn rows_to_table(input: &str, format: utils::InputFormat) -> CodecResult<String> {
    let rows = utils::load_rows(input, format)?;
    Ok(array_to_table(rows))
}

/// Import the first table of `html` and serialize the descriptor as JSON
#[cfg(feature = "data-loading")]
pub fn table_to_json(html: &str, pretty: bool) -> CodecResult<String> {
    let settings = import_table(html).ok_or_else(|| CodecError::invalid("no <table> element found"))?;
    let json = if pretty {
        serde_json::to_string_pretty(&settings)
    } else {
        serde_json::to_string(&settings)
    };
    json.map_err(|err| CodecError::invalid(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("<TABLE><tr><td>x</td></tr></TABLE>"), "html");
        assert_eq!(detect_format("<meta charset=utf-8><table></table>"), "html");
        assert_eq!(detect_format("  [[1, 2]]"), "json");
        assert_eq!(detect_format("a\tb\nc\td"), "tsv");
        assert_eq!(detect_format("a,b\nc,d"), "csv");
        assert_eq!(detect_format("single"), "tsv");
        assert_eq!(detect_format("   \n"), "unknown");
    }

    #[test]
    fn test_is_html_table() {
        assert!(is_html_table("<html><body><Table>"));
        assert!(!is_html_table("<tab"));
        assert!(!is_html_table("table"));
    }

    #[test]
    fn test_reexports_round_trip() {
        let html = array_to_table(vec![vec!["x\ny", "a   b"]]);
        let settings = import_table(&html).unwrap();
        assert_eq!(
            settings.data,
            Some(vec![vec![
                Some("x\r\ny".to_string()),
                Some("a   b".to_string())
            ]])
        );
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_rows_to_table() {
        let html = rows_to_table("a,b\n", utils::InputFormat::Csv).unwrap();
        assert_eq!(html, "<table><tbody><tr><td>a</td><td>b</td></tr></tbody></table>");
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_table_to_json() {
        let json = table_to_json("<table><tr><td>x</td></tr></table>", false).unwrap();
        assert_eq!(json, r#"{"data":[["x"]]}"#);

        assert!(table_to_json("<p>no table</p>", false).is_err());
    }
}
