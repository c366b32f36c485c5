//! HTML Table to Grid-Settings Importer
//!
//! Parses pasted clipboard markup and rebuilds the descriptor a fresh grid is
//! configured from: cell data, merged regions, column headers (flat or
//! nested), row headers and fixed top/bottom rows.
//!
//! # Architecture
//!
//! ```text
//! raw markup -> strip cell markup -> scraper::Html -> dialect detection
//!            -> row classification -> slot matrix -> GridSettings
//! ```
//!
//! # Example
//!
//! ```rust
//! use gridclip::import::import_table;
//!
//! let settings = import_table("<table><tr><td>a</td><td>b&amp;c</td></tr></table>").unwrap();
//! assert_eq!(
//!     settings.data,
//!     Some(vec![vec![Some("a".to_string()), Some("b&c".to_string())]])
//! );
//! ```

mod dialect;
mod matrix;
mod parser;
mod preprocess;


// Re-export public API
pub use dialect::{detect_dialect, generator_of, normalize_cell_text, Dialect};
pub use matrix::{DataMatrix, Slot};
pub use parser::{parse_span, TableImporter, MAX_COLSPAN, MAX_ROWSPAN};
pub use preprocess::strip_cell_markup;

use lazy_static::lazy_static;
use log::debug;
use scraper::{Html, Selector};

use crate::grid::GridSettings;
use crate::utils::error::CodecWarning;

lazy_static! {
    static ref TABLE_SELECTOR: Selector = Selector::parse("table").unwrap();
}

/// Options for importing markup
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Force a dialect instead of detecting it from the generator marker
    pub dialect: Option<Dialect>,
}

impl ImportOptions {
    /// Detect the dialect from the markup
    pub fn new() -> Self {
        Self::default()
    }

    /// Always treat the markup as generic
    pub fn generic() -> Self {
        ImportOptions {
            dialect: Some(Dialect::Generic),
        }
    }

    /// Always treat the markup as Excel output
    pub fn excel() -> Self {
        ImportOptions {
            dialect: Some(Dialect::Excel),
        }
    }
}

/// Descriptor plus the warnings collected while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutput {
    pub settings: GridSettings,
    pub warnings: Vec<CodecWarning>,
}

/// Import the first table of `html`; `None` when there is no table
pub fn import_table(html: &str) -> Option<GridSettings> {
    import_table_with_options(html, &ImportOptions::default())
}

/// Import with explicit options
pub fn import_table_with_options(html: &str, options: &ImportOptions) -> Option<GridSettings> {
    import_table_with_diagnostics(html, options).map(|output| output.settings)
}

/// Import and keep the warnings
pub fn import_table_with_diagnostics(html: &str, options: &ImportOptions) -> Option<ImportOutput> {
    let doc = Html::parse_fragment(&strip_cell_markup(html));
    import_document(&doc, options)
}

/// Import the first table of an already parsed document.
///
/// Cell interiors are taken as they are, so callers should have run
/// [`strip_cell_markup`] on the source first.
pub fn import_document(doc: &Html, options: &ImportOptions) -> Option<ImportOutput> {
    let Some(table) = doc.select(&TABLE_SELECTOR).next() else {
        debug!("no <table> element in pasted markup");
        return None;
    };

    let dialect = options.dialect.unwrap_or_else(|| detect_dialect(doc));
    let (settings, warnings) = TableImporter::import(table, dialect);

    Some(ImportOutput { settings, warnings })
}
