//! Grid to HTML Table Export Engine
//!
//! Serializes a rectangular window of a grid into the clipboard markup
//! dialect spreadsheet applications paste.
//!
//! # Architecture
//!
//! ```text
//! Selection + ExportOptions -> Coordinate Resolver -> ExportWindow
//!                                                  -> Header pass + Body pass -> <table>
//! ```
//!
//! # Example
//!
//! ```rust
//! use gridclip::export::{export_range, ExportOptions};
//! use gridclip::grid::{MemoryGrid, Selection};
//!
//! let grid = MemoryGrid::from_rows(vec![vec!["a", "b"], vec!["c", "d"]]);
//! let html = export_range(&grid, Selection::new(0, 0, 1, 0), &ExportOptions::default());
//! assert_eq!(html, "<table><tbody><tr><td>a</td></tr><tr><td>c</td></tr></tbody></table>");
//! ```

mod array;
mod cell;
mod generator;
mod options;
mod window;

#[cfg(test)]
mod tests;

// Re-export public API
pub use array::{array_to_table, CellText};
pub use cell::{HtmlCell, HtmlRow};
pub use generator::{export_table, TableMarkupGenerator};
pub use options::ExportOptions;
pub use window::{resolve, ExportWindow, IndexRange, HEADER_SENTINEL};

use crate::grid::{GridView, Selection};

/// Resolve a selection and export it in one step
pub fn export_range<G: GridView + ?Sized>(
    grid: &G,
    selection: Selection,
    options: &ExportOptions,
) -> String {
    let window = resolve(grid, selection, options);
    export_table(grid, &window)
}

/// Export the grid's last selection; `None` when nothing is selected
pub fn export_selection<G: GridView + ?Sized>(grid: &G, options: &ExportOptions) -> Option<String> {
    let selection = grid.get_selected_last()?;
    Some(export_range(grid, selection, options))
}

/// Export the whole grid, including the headers it renders
pub fn instance_to_html<G: GridView + ?Sized>(grid: &G) -> String {
    let has_col_headers = grid.has_col_headers();
    let has_row_headers = grid.has_row_headers();

    // Row headers are only exported for selections starting at the header row
    let start_row = if has_col_headers || has_row_headers {
        HEADER_SENTINEL
    } else {
        0
    };
    let start_col = if has_row_headers { HEADER_SENTINEL } else { 0 };

    let selection = Selection::new(
        start_row,
        start_col,
        last_index(grid.count_rows()),
        last_index(grid.count_cols()),
    );

    let options = ExportOptions {
        with_column_headers: has_col_headers,
        with_row_headers: has_row_headers,
        ..ExportOptions::default()
    };

    export_range(grid, selection, &options)
}

fn last_index(count: usize) -> isize {
    isize::try_from(count).unwrap_or(isize::MAX) - 1
}
