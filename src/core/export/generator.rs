//! Grid to HTML table generator

use log::{debug, trace};

use super::cell::{HtmlCell, HtmlRow};
use super::window::{ExportWindow, IndexRange};
use crate::core::codec::{encode_cell_value, encode_html_entities};
use crate::grid::GridView;

/// Collects header and body rows and renders them as one `<table>`
pub struct TableMarkupGenerator {
    /// Rows rendered inside `<thead>`
    pub header_rows: Vec<HtmlRow>,
    /// Rows rendered inside `<tbody>`
    pub body_rows: Vec<HtmlRow>,
    /// Emit `<tbody></tbody>` even when there are no body rows
    pub always_body: bool,
    /// Track if we're currently processing header rows
    in_header: bool,
}

impl TableMarkupGenerator {
    /// Create an empty generator
    pub fn new() -> Self {
        TableMarkupGenerator {
            header_rows: Vec::new(),
            body_rows: Vec::new(),
            always_body: false,
            in_header: false,
        }
    }

    /// Start processing header rows
    pub fn begin_header(&mut self) {
        self.in_header = true;
    }

    /// End processing header rows
    pub fn end_header(&mut self) {
        self.in_header = false;
    }

    /// Add a row to the current section.
    ///
    /// Empty header rows are dropped; empty body rows are kept since a row
    /// fully covered by merges still occupies a line of the table.
    pub fn push_row(&mut self, row: HtmlRow) {
        if self.in_header {
            if !row.is_empty() {
                self.header_rows.push(row);
            }
        } else {
            self.body_rows.push(row);
        }
    }

    /// Render the collected rows
    pub fn generate_html(&self) -> String {
        let mut output = String::from("<table>");

        if !self.header_rows.is_empty() {
            output.push_str("<thead>");
            for row in &self.header_rows {
                output.push_str(&row.to_html());
            }
            output.push_str("</thead>");
        }

        if !self.body_rows.is_empty() || self.always_body {
            output.push_str("<tbody>");
            for row in &self.body_rows {
                output.push_str(&row.to_html());
            }
            output.push_str("</tbody>");
        }

        output.push_str("</table>");
        output
    }
}

impl Default for TableMarkupGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Export a resolved window of a grid as an HTML table
pub fn export_table<G: GridView + ?Sized>(grid: &G, window: &ExportWindow) -> String {
    let mut gen = TableMarkupGenerator::new();

    gen.begin_header();
    push_header_rows(grid, window, &mut gen);
    gen.end_header();

    push_body_rows(grid, window, &mut gen);

    debug!(
        "exported {} header row(s), {} body row(s)",
        gen.header_rows.len(),
        gen.body_rows.len()
    );

    gen.generate_html()
}

fn push_header_rows<G: GridView + ?Sized>(
    grid: &G,
    window: &ExportWindow,
    gen: &mut TableMarkupGenerator,
) {
    for level in window.header_levels() {
        let mut row = HtmlRow::new();

        if window.row_headers {
            row.push(HtmlCell::header(encode_html_entities(&grid.get_row_header(-1))));
        }

        if let Some(columns) = window.columns {
            push_header_cells(grid, window, columns, level, &mut row);
        }

        gen.push_row(row);
    }
}

fn push_header_cells<G: GridView + ?Sized>(
    grid: &G,
    window: &ExportWindow,
    columns: IndexRange,
    level: isize,
    row: &mut HtmlRow,
) {
    let mut col = columns.start;

    while col <= columns.end {
        let span = grid
            .header_colspan(level, col)
            .unwrap_or(1)
            .clamp(1, columns.remaining_from(col));

        // The label lands on the first kept column the span covers
        let kept = kept_columns(window, columns, col, span);
        if kept > 0 {
            let label = encode_html_entities(&grid.get_col_header(col, level));
            row.push(HtmlCell::header(label).with_spans(1, kept));
        }

        col += span;
    }
}

fn push_body_rows<G: GridView + ?Sized>(
    grid: &G,
    window: &ExportWindow,
    gen: &mut TableMarkupGenerator,
) {
    let (Some(rows), Some(columns)) = (window.rows, window.columns) else {
        return;
    };

    let data = grid.get_data(rows.start, columns.start, rows.end, columns.end);

    for (row_offset, row_index) in rows.iter().enumerate() {
        if window.ignored_rows.contains(&row_offset) {
            continue;
        }

        let mut row = HtmlRow::new();

        if window.row_headers {
            let label = grid.get_row_header(isize::try_from(row_index).unwrap_or(isize::MAX));
            row.push(HtmlCell::header(encode_html_entities(&label)));
        }

        for (col_offset, col_index) in columns.iter().enumerate() {
            if window.ignored_columns.contains(&col_offset) {
                continue;
            }

            let meta = grid.get_cell_meta(row_index, col_index);
            if meta.hidden {
                trace!("skipping hidden cell ({}, {})", row_index, col_index);
                continue;
            }

            let value = data
                .get(row_offset)
                .and_then(|cells| cells.get(col_offset))
                .and_then(|v| v.as_deref());

            let rowspan = meta.rowspan.min(rows.remaining_from(row_index));
            let colspan = kept_columns(
                window,
                columns,
                col_index,
                meta.colspan.min(columns.remaining_from(col_index)),
            );

            row.push(HtmlCell::new(encode_cell_value(value)).with_spans(rowspan, colspan));
        }

        gen.push_row(row);
    }
}

/// Columns of `[col, col + span)` that are not ignored
fn kept_columns(window: &ExportWindow, columns: IndexRange, col: usize, span: usize) -> usize {
    let first = col - columns.start;
    (first..first + span)
        .filter(|offset| !window.ignored_columns.contains(offset))
        .count()
}
