//! Read-only grid interface consumed by the exporter

/// Cell metadata relevant to export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMeta {
    /// Cell is covered by a merge anchored elsewhere
    pub hidden: bool,
    /// Number of rows this cell spans
    pub rowspan: usize,
    /// Number of columns this cell spans
    pub colspan: usize,
}

impl Default for CellMeta {
    fn default() -> Self {
        Self {
            hidden: false,
            rowspan: 1,
            colspan: 1,
        }
    }
}

impl CellMeta {
    /// Metadata for a merge anchor
    pub fn merged(rowspan: usize, colspan: usize) -> Self {
        Self {
            hidden: false,
            rowspan: rowspan.max(1),
            colspan: colspan.max(1),
        }
    }

    /// Metadata for a cell covered by a merge
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::default()
        }
    }
}

/// A selection rectangle given as two corners.
///
/// Corners are not ordered; negative indices address header space
/// (`-1` is the header row/column adjacent to the body).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub from_row: isize,
    pub from_col: isize,
    pub to_row: isize,
    pub to_col: isize,
}

impl Selection {
    /// Create a selection from two corners
    pub fn new(from_row: isize, from_col: isize, to_row: isize, to_col: isize) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    /// Top-most row index (may be negative)
    pub fn start_row(&self) -> isize {
        self.from_row.min(self.to_row)
    }

    /// Bottom-most row index
    pub fn end_row(&self) -> isize {
        self.from_row.max(self.to_row)
    }

    /// Left-most column index (may be negative)
    pub fn start_col(&self) -> isize {
        self.from_col.min(self.to_col)
    }

    /// Right-most column index
    pub fn end_col(&self) -> isize {
        self.from_col.max(self.to_col)
    }
}

impl From<[isize; 4]> for Selection {
    fn from(coords: [isize; 4]) -> Self {
        Selection::new(coords[0], coords[1], coords[2], coords[3])
    }
}

/// Read-only view of a grid.
///
/// The codec never mutates the grid; callers serialize concurrent mutation.
pub trait GridView {
    /// Number of body rows
    fn count_rows(&self) -> usize;

    /// Number of body columns
    fn count_cols(&self) -> usize;

    /// Whether the grid renders a row-header column
    fn has_row_headers(&self) -> bool;

    /// Whether the grid renders column headers
    fn has_col_headers(&self) -> bool;

    /// Number of column-header levels (nested headers count each level)
    fn column_header_levels(&self) -> usize {
        usize::from(self.has_col_headers())
    }

    /// Value of a single body cell
    fn cell_value(&self, row: usize, col: usize) -> Option<String>;

    /// Values in an inclusive body window
    fn get_data(
        &self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
    ) -> Vec<Vec<Option<String>>> {
        (start_row..=end_row)
            .map(|row| {
                (start_col..=end_col)
                    .map(|col| self.cell_value(row, col))
                    .collect()
            })
            .collect()
    }

    /// Merge/visibility metadata of a body cell
    fn get_cell_meta(&self, _row: usize, _col: usize) -> CellMeta {
        CellMeta::default()
    }

    /// Column header label at the given level (`-1` is the level next to the body)
    fn get_col_header(&self, col: usize, level: isize) -> String;

    /// Row header label; row `-1` addresses the corner cell
    fn get_row_header(&self, row: isize) -> String;

    /// Column span of the rendered header cell at `(level, col)`, if it spans
    fn header_colspan(&self, _level: isize, _col: usize) -> Option<usize> {
        None
    }

    /// Last selected range, if any
    fn get_selected_last(&self) -> Option<Selection> {
        None
    }
}
