//! Tests for grid to HTML table export

use super::*;
use crate::grid::{CellMeta, GridView, HeaderLabel, MemoryGrid, MergeCell, Selection};
use pretty_assertions::assert_eq;

fn letters_grid() -> MemoryGrid {
    MemoryGrid::from_rows(vec![
        vec!["a", "b", "c"],
        vec!["d", "e", "f"],
        vec!["g", "h", "i"],
    ])
}

#[test]
fn test_basic_body() {
    let grid = letters_grid();
    let html = export_range(&grid, Selection::new(0, 0, 1, 1), &ExportOptions::default());
    assert_eq!(
        html,
        "<table><tbody><tr><td>a</td><td>b</td></tr><tr><td>d</td><td>e</td></tr></tbody></table>"
    );
}

#[test]
fn test_empty_window_is_table_shell() {
    let grid = MemoryGrid::new();
    let html = export_range(&grid, Selection::new(0, 0, 0, 0), &ExportOptions::with_headers());
    assert_eq!(html, "<table></table>");

    assert_eq!(export_table(&grid, &ExportWindow::empty()), "<table></table>");
}

#[test]
fn test_column_headers() {
    let grid = letters_grid().with_col_headers(["A", "B", "C"]);
    let html = export_range(&grid, Selection::new(-1, 1, 0, 2), &ExportOptions::with_headers());
    assert_eq!(
        html,
        "<table><thead><tr><th>B</th><th>C</th></tr></thead>\
         <tbody><tr><td>b</td><td>c</td></tr></tbody></table>"
    );
}

#[test]
fn test_row_headers_with_corner() {
    let grid = letters_grid()
        .with_col_headers(["A", "B", "C"])
        .with_row_headers(["r1", "r2", "r3"])
        .with_corner("#");
    let html = export_range(&grid, Selection::new(-1, 0, 1, 0), &ExportOptions::with_headers());
    assert_eq!(
        html,
        "<table><thead><tr><th>#</th><th>A</th></tr></thead>\
         <tbody><tr><th>r1</th><td>a</td></tr><tr><th>r2</th><td>d</td></tr></tbody></table>"
    );
}

#[test]
fn test_nested_headers_with_span() {
    let grid = letters_grid().with_nested_headers(vec![
        vec![
            HeaderLabel::Spanning {
                label: "AB".to_string(),
                colspan: 2,
            },
            HeaderLabel::from("C"),
        ],
        vec!["A".into(), "B".into(), "C".into()],
    ]);
    let html = export_range(&grid, Selection::new(0, 0, 0, 2), &ExportOptions::with_headers());
    assert_eq!(
        html,
        "<table><thead><tr><th colspan=\"2\">AB</th><th>C</th></tr>\
         <tr><th>A</th><th>B</th><th>C</th></tr></thead>\
         <tbody><tr><td>a</td><td>b</td><td>c</td></tr></tbody></table>"
    );

    let html = export_range(
        &grid,
        Selection::new(0, 0, 0, 2),
        &ExportOptions::with_headers().first_level_only(),
    );
    assert!(html.starts_with("<table><thead><tr><th>A</th><th>B</th><th>C</th></tr></thead>"));
}

#[test]
fn test_header_span_clipped_to_window() {
    let grid = letters_grid().with_nested_headers(vec![
        vec![HeaderLabel::Spanning {
            label: "All".to_string(),
            colspan: 3,
        }],
        vec!["A".into(), "B".into(), "C".into()],
    ]);
    let html = export_range(&grid, Selection::new(0, 0, 0, 1), &ExportOptions::headers_only());
    assert_eq!(
        html,
        "<table><thead><tr><th colspan=\"2\">All</th></tr><tr><th>A</th><th>B</th></tr></thead></table>"
    );
}

#[test]
fn test_headers_only_has_no_body() {
    let grid = letters_grid().with_col_headers(["A", "B", "C"]);
    let html = export_range(&grid, Selection::new(0, 0, 2, 2), &ExportOptions::headers_only());
    assert_eq!(
        html,
        "<table><thead><tr><th>A</th><th>B</th><th>C</th></tr></thead></table>"
    );
}

#[test]
fn test_merged_cells() {
    let grid = letters_grid().with_merge(MergeCell::new(0, 0, 2, 2));
    let html = export_range(&grid, Selection::new(0, 0, 2, 2), &ExportOptions::default());
    assert_eq!(
        html,
        "<table><tbody><tr><td rowspan=\"2\" colspan=\"2\">a</td><td>c</td></tr>\
         <tr><td>f</td></tr><tr><td>g</td><td>h</td><td>i</td></tr></tbody></table>"
    );
}

#[test]
fn test_span_clipped_to_remaining_rows() {
    // rowspan=3 anchored on the last two rows of the window
    let grid = letters_grid().with_merge(MergeCell::new(1, 1, 3, 1));
    let html = export_range(&grid, Selection::new(0, 0, 2, 2), &ExportOptions::default());
    assert!(html.contains("<td rowspan=\"2\">e</td>"));
    assert!(!html.contains("rowspan=\"3\""));

    let grid = letters_grid().with_merge(MergeCell::new(0, 1, 1, 5));
    let html = export_range(&grid, Selection::new(0, 0, 0, 2), &ExportOptions::default());
    assert!(html.contains("<td colspan=\"2\">b</td>"));
}

#[test]
fn test_hidden_cells_emit_nothing() {
    struct Hidden(MemoryGrid);

    impl GridView for Hidden {
        fn count_rows(&self) -> usize {
            self.0.count_rows()
        }
        fn count_cols(&self) -> usize {
            self.0.count_cols()
        }
        fn has_row_headers(&self) -> bool {
            false
        }
        fn has_col_headers(&self) -> bool {
            false
        }
        fn cell_value(&self, row: usize, col: usize) -> Option<String> {
            self.0.cell_value(row, col)
        }
        fn get_cell_meta(&self, row: usize, col: usize) -> CellMeta {
            if row == col {
                CellMeta::hidden()
            } else {
                CellMeta::default()
            }
        }
        fn get_col_header(&self, col: usize, level: isize) -> String {
            self.0.get_col_header(col, level)
        }
        fn get_row_header(&self, row: isize) -> String {
            self.0.get_row_header(row)
        }
    }

    let grid = Hidden(letters_grid());
    let html = export_range(&grid, Selection::new(0, 0, 2, 2), &ExportOptions::default());
    assert!(!html.contains(">a<"));
    assert!(!html.contains(">e<"));
    assert!(!html.contains(">i<"));
    assert_eq!(html.matches("<td>").count(), 6);
}

#[test]
fn test_fully_covered_row_is_kept() {
    let grid = letters_grid().with_merge(MergeCell::new(0, 0, 2, 3));
    let html = export_range(&grid, Selection::new(0, 0, 1, 2), &ExportOptions::default());
    assert_eq!(
        html,
        "<table><tbody><tr><td rowspan=\"2\" colspan=\"3\">a</td></tr><tr></tr></tbody></table>"
    );
}

#[test]
fn test_ignored_offsets() {
    let grid = letters_grid();
    let opts = ExportOptions::default().ignore_rows([1]).ignore_columns([0]);
    let html = export_range(&grid, Selection::new(0, 0, 2, 2), &opts);
    assert_eq!(
        html,
        "<table><tbody><tr><td>b</td><td>c</td></tr><tr><td>h</td><td>i</td></tr></tbody></table>"
    );
}

fn grouped_grid() -> MemoryGrid {
    MemoryGrid::from_rows(vec![vec!["1", "2", "3"]]).with_nested_headers(vec![
        vec![HeaderLabel::Spanning {
            label: "G".to_string(),
            colspan: 3,
        }],
        vec!["A".into(), "B".into(), "C".into()],
    ])
}

#[test]
fn test_ignored_column_inside_header_span() {
    let opts = ExportOptions::with_headers().ignore_columns([1]);
    let html = export_range(&grouped_grid(), Selection::new(0, 0, 0, 2), &opts);
    assert_eq!(
        html,
        "<table><thead><tr><th colspan=\"2\">G</th></tr>\
         <tr><th>A</th><th>C</th></tr></thead>\
         <tbody><tr><td>1</td><td>3</td></tr></tbody></table>"
    );
}

#[test]
fn test_ignored_header_span_anchor() {
    let opts = ExportOptions::with_headers().ignore_columns([0]);
    let html = export_range(&grouped_grid(), Selection::new(0, 0, 0, 2), &opts);
    assert_eq!(
        html,
        "<table><thead><tr><th colspan=\"2\">G</th></tr>\
         <tr><th>B</th><th>C</th></tr></thead>\
         <tbody><tr><td>2</td><td>3</td></tr></tbody></table>"
    );

    // Every column of the span ignored: the outer level has nothing left
    let opts = ExportOptions::with_headers().ignore_columns([0, 1, 2]);
    let html = export_range(&grouped_grid(), Selection::new(0, 0, 0, 2), &opts);
    assert_eq!(html, "<table><tbody><tr></tr></tbody></table>");
}

#[test]
fn test_ignored_column_inside_merge() {
    let grid = letters_grid().with_merge(MergeCell::new(0, 0, 1, 3));
    let opts = ExportOptions::default().ignore_columns([1]);
    let html = export_range(&grid, Selection::new(0, 0, 1, 2), &opts);
    assert_eq!(
        html,
        "<table><tbody><tr><td colspan=\"2\">a</td></tr>\
         <tr><td>d</td><td>f</td></tr></tbody></table>"
    );
}

#[test]
fn test_empty_values_and_escaping() {
    let mut grid = MemoryGrid::new();
    grid.set_value(0, 1, "x < y & y > z");
    let html = export_range(&grid, Selection::new(0, 0, 0, 1), &ExportOptions::default());
    assert_eq!(
        html,
        "<table><tbody><tr><td></td><td>x &lt; y &amp; y &gt; z</td></tr></tbody></table>"
    );
}

#[test]
fn test_header_labels_are_encoded() {
    let grid = MemoryGrid::from_rows(vec![vec!["1"]]).with_col_headers(["a<b"]);
    let html = export_range(&grid, Selection::new(-1, 0, 0, 0), &ExportOptions::with_headers());
    assert!(html.contains("<th>a&lt;b</th>"));
}

#[test]
fn test_instance_to_html() {
    let grid = MemoryGrid::from_rows(vec![vec!["1", "2"]])
        .with_col_headers(["A", "B"])
        .with_row_headers(["r"]);
    assert_eq!(
        instance_to_html(&grid),
        "<table><thead><tr><th></th><th>A</th><th>B</th></tr></thead>\
         <tbody><tr><th>r</th><td>1</td><td>2</td></tr></tbody></table>"
    );

    let plain = MemoryGrid::from_rows(vec![vec!["1"]]);
    assert_eq!(
        instance_to_html(&plain),
        "<table><tbody><tr><td>1</td></tr></tbody></table>"
    );
}

#[test]
fn test_export_selection() {
    let mut grid = letters_grid();
    assert_eq!(export_selection(&grid, &ExportOptions::default()), None);

    grid.select(Selection::new(2, 2, 1, 1));
    assert_eq!(
        export_selection(&grid, &ExportOptions::default()).as_deref(),
        Some("<table><tbody><tr><td>e</td><td>f</td></tr><tr><td>h</td><td>i</td></tr></tbody></table>")
    );
}

#[test]
fn test_generator_sections() {
    let mut gen = TableMarkupGenerator::new();
    gen.begin_header();
    gen.push_row(HtmlRow::new());
    gen.end_header();
    assert_eq!(gen.generate_html(), "<table></table>");

    gen.always_body = true;
    assert_eq!(gen.generate_html(), "<table><tbody></tbody></table>");
}
