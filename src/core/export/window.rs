//! Coordinate resolution
//!
//! Turns a selection rectangle plus [`ExportOptions`] into the canonical,
//! clamped [`ExportWindow`] the generator walks. Nothing is rejected here:
//! out-of-range input simply produces an empty window.

use fxhash::FxHashSet;
use log::debug;

use super::options::ExportOptions;
use crate::grid::{GridView, Selection};

/// Selection index that addresses the header row/column
pub const HEADER_SENTINEL: isize = -1;

/// Inclusive range of body indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    /// Create a range; it is empty when `start` exceeds `end`
    pub fn new(start: usize, end: usize) -> Self {
        IndexRange { start, end }
    }

    /// Number of indices covered
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Whether the range covers no index
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Iterate over the covered indices
    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Indices left in the range from `index` on, `index` included
    pub fn remaining_from(&self, index: usize) -> usize {
        self.end.saturating_sub(index) + 1
    }
}

/// The resolved export window
#[derive(Debug, Clone, PartialEq)]
pub struct ExportWindow {
    /// Body rows; `None` when cells are not exported or no row is in range
    pub rows: Option<IndexRange>,
    /// Body columns; `None` when no column is in range
    pub columns: Option<IndexRange>,
    /// First (outermost) header level to export; levels run up to, not including, 0
    pub column_header_level: Option<isize>,
    /// Whether the row-header column is exported
    pub row_headers: bool,
    /// Row offsets relative to `rows.start`
    pub ignored_rows: FxHashSet<usize>,
    /// Column offsets relative to `columns.start`
    pub ignored_columns: FxHashSet<usize>,
}

impl ExportWindow {
    /// A window that exports nothing
    pub fn empty() -> Self {
        ExportWindow {
            rows: None,
            columns: None,
            column_header_level: None,
            row_headers: false,
            ignored_rows: FxHashSet::default(),
            ignored_columns: FxHashSet::default(),
        }
    }

    /// Header levels to export, outermost first
    pub fn header_levels(&self) -> std::ops::Range<isize> {
        match self.column_header_level {
            Some(start) => start..0,
            None => 0..0,
        }
    }
}

/// Resolve a selection against a grid.
///
/// Corners are normalized, body bounds are clamped to the data extent and to
/// the row/column limits, and header levels are derived from the options.
pub fn resolve<G: GridView + ?Sized>(
    grid: &G,
    selection: Selection,
    options: &ExportOptions,
) -> ExportWindow {
    let columns = clamp_range(
        selection.start_col(),
        selection.end_col(),
        grid.count_cols(),
        options.columns_limit,
    );

    let rows = if options.with_cells {
        clamp_range(
            selection.start_row(),
            selection.end_row(),
            grid.count_rows(),
            options.rows_limit,
        )
    } else {
        None
    };

    let levels = options
        .column_headers_count
        .unwrap_or_else(|| grid.column_header_levels());

    let column_header_level = if options.with_column_headers && levels > 0 {
        if options.only_first_level {
            Some(-1)
        } else {
            Some(-isize::try_from(levels).unwrap_or(isize::MAX))
        }
    } else {
        None
    };

    let row_headers = options.with_row_headers
        && grid.has_row_headers()
        && selection.start_row() == HEADER_SENTINEL;

    let window = ExportWindow {
        rows,
        columns,
        column_header_level,
        row_headers,
        ignored_rows: options.ignored_rows.clone(),
        ignored_columns: options.ignored_columns.clone(),
    };

    debug!(
        "resolved export window: rows={:?} columns={:?} header_level={:?} row_headers={}",
        window.rows, window.columns, window.column_header_level, window.row_headers
    );

    window
}

/// Clamp an (ordered) selection span to `[0, extent)` and an optional length limit
fn clamp_range(start: isize, end: isize, extent: usize, limit: Option<usize>) -> Option<IndexRange> {
    if extent == 0 || end < 0 {
        return None;
    }

    let start = usize::try_from(start.max(0)).ok()?;
    if start >= extent {
        return None;
    }

    let mut end = usize::try_from(end).ok()?.min(extent - 1);
    if let Some(limit) = limit {
        if limit == 0 {
            return None;
        }
        end = end.min(start.saturating_add(limit - 1));
    }

    Some(IndexRange::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{HeaderLabel, MemoryGrid};

    fn grid_3x4() -> MemoryGrid {
        MemoryGrid::from_rows(vec![
            vec!["a", "b", "c", "d"],
            vec!["e", "f", "g", "h"],
            vec!["i", "j", "k", "l"],
        ])
        .with_col_headers(["A", "B", "C", "D"])
    }

    #[test]
    fn test_normalizes_corners() {
        let grid = grid_3x4();
        let window = resolve(&grid, Selection::new(2, 3, 0, 1), &ExportOptions::default());
        assert_eq!(window.rows, Some(IndexRange::new(0, 2)));
        assert_eq!(window.columns, Some(IndexRange::new(1, 3)));
        assert_eq!(window.column_header_level, None);
        assert!(!window.row_headers);
    }

    #[test]
    fn test_clamps_negative_and_overflow() {
        let grid = grid_3x4();
        let window = resolve(&grid, Selection::new(-1, -1, 10, 10), &ExportOptions::default());
        assert_eq!(window.rows, Some(IndexRange::new(0, 2)));
        assert_eq!(window.columns, Some(IndexRange::new(0, 3)));
    }

    #[test]
    fn test_limits() {
        let grid = grid_3x4();
        let opts = ExportOptions::default().rows_limit(2).columns_limit(1);
        let window = resolve(&grid, Selection::new(1, 1, 2, 3), &opts);
        assert_eq!(window.rows, Some(IndexRange::new(1, 2)));
        assert_eq!(window.columns, Some(IndexRange::new(1, 1)));

        let window = resolve(&grid, Selection::new(0, 0, 2, 3), &ExportOptions::default().rows_limit(0));
        assert_eq!(window.rows, None);
    }

    #[test]
    fn test_unbounded_limits_saturate() {
        let grid = grid_3x4();
        let opts = ExportOptions::default()
            .rows_limit(usize::MAX)
            .columns_limit(usize::MAX);

        let window = resolve(&grid, Selection::new(1, 2, 2, 3), &opts);
        assert_eq!(window.rows, Some(IndexRange::new(1, 2)));
        assert_eq!(window.columns, Some(IndexRange::new(2, 3)));

        let html = crate::export_range(&grid, Selection::new(2, 3, 2, 3), &opts);
        assert_eq!(html, "<table><tbody><tr><td>l</td></tr></tbody></table>");
    }

    #[test]
    fn test_column_header_levels() {
        let grid = MemoryGrid::from_rows(vec![vec!["1", "2"]]).with_nested_headers(vec![
            vec![HeaderLabel::Spanning {
                label: "G".to_string(),
                colspan: 2,
            }],
            vec!["A".into(), "B".into()],
        ]);
        let sel = Selection::new(-1, 0, 0, 1);

        let window = resolve(&grid, sel, &ExportOptions::with_headers());
        assert_eq!(window.column_header_level, Some(-2));
        assert_eq!(window.header_levels(), -2..0);

        let window = resolve(&grid, sel, &ExportOptions::with_headers().first_level_only());
        assert_eq!(window.column_header_level, Some(-1));

        let opts = ExportOptions {
            column_headers_count: Some(3),
            ..ExportOptions::with_headers()
        };
        assert_eq!(resolve(&grid, sel, &opts).column_header_level, Some(-3));
    }

    #[test]
    fn test_no_header_levels_without_headers() {
        let grid = MemoryGrid::from_rows(vec![vec!["1"]]);
        let window = resolve(&grid, Selection::new(-1, -1, 0, 0), &ExportOptions::with_headers());
        assert_eq!(window.column_header_level, None);
    }

    #[test]
    fn test_row_headers_need_header_sentinel() {
        let grid = grid_3x4().with_row_headers(["1", "2", "3"]);
        let opts = ExportOptions::with_headers();

        assert!(resolve(&grid, Selection::new(-1, 0, 2, 3), &opts).row_headers);
        assert!(resolve(&grid, Selection::new(2, 0, -1, 3), &opts).row_headers);
        assert!(!resolve(&grid, Selection::new(0, 0, 2, 3), &opts).row_headers);
        assert!(!resolve(&grid, Selection::new(-2, 0, 2, 3), &opts).row_headers);
        assert!(!resolve(&grid, Selection::new(-1, 0, 2, 3), &ExportOptions::default()).row_headers);

        // The grid must render row headers at all
        assert!(!resolve(&grid_3x4(), Selection::new(-1, 0, 2, 3), &opts).row_headers);
    }

    #[test]
    fn test_without_cells() {
        let grid = grid_3x4();
        let window = resolve(&grid, Selection::new(-1, 0, 2, 1), &ExportOptions::headers_only());
        assert_eq!(window.rows, None);
        assert_eq!(window.columns, Some(IndexRange::new(0, 1)));
        assert_eq!(window.column_header_level, Some(-1));
    }

    #[test]
    fn test_empty_grid_resolves_to_empty_window() {
        let grid = MemoryGrid::new();
        let window = resolve(&grid, Selection::new(0, 0, 0, 0), &ExportOptions::default());
        assert_eq!(window, ExportWindow::empty());
    }

    #[test]
    fn test_index_range() {
        let range = IndexRange::new(2, 5);
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());
        assert!(IndexRange::new(3, 2).is_empty());
        assert_eq!(IndexRange::new(3, 2).len(), 0);
        assert_eq!(range.remaining_from(4), 2);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }
}
