//! Export options

use fxhash::FxHashSet;

/// Options controlling which parts of a grid are exported
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Include body cells
    /// Default: true
    pub with_cells: bool,

    /// Include column-header rows
    /// Default: false
    pub with_column_headers: bool,

    /// Include the row-header column (only when the selection starts at the header row `-1`)
    /// Default: false
    pub with_row_headers: bool,

    /// Export only the header level next to the body instead of every nested level
    /// Default: false
    pub only_first_level: bool,

    /// Number of column-header levels; `None` asks the grid
    /// Default: None
    pub column_headers_count: Option<usize>,

    /// Maximum number of body rows; `None` is unbounded
    /// Default: None
    pub rows_limit: Option<usize>,

    /// Maximum number of body columns; `None` is unbounded
    /// Default: None
    pub columns_limit: Option<usize>,

    /// Row offsets (relative to the window) to leave out
    pub ignored_rows: FxHashSet<usize>,

    /// Column offsets (relative to the window) to leave out
    pub ignored_columns: FxHashSet<usize>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            with_cells: true,
            with_column_headers: false,
            with_row_headers: false,
            only_first_level: false,
            column_headers_count: None,
            rows_limit: None,
            columns_limit: None,
            ignored_rows: FxHashSet::default(),
            ignored_columns: FxHashSet::default(),
        }
    }
}

impl ExportOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Body cells plus column and row headers
    pub fn with_headers() -> Self {
        Self {
            with_column_headers: true,
            with_row_headers: true,
            ..Self::default()
        }
    }

    /// Column headers only (e.g. "copy headers")
    pub fn headers_only() -> Self {
        Self {
            with_cells: false,
            with_column_headers: true,
            ..Self::default()
        }
    }

    /// Limit the number of exported body rows
    pub fn rows_limit(mut self, limit: usize) -> Self {
        self.rows_limit = Some(limit);
        self
    }

    /// Limit the number of exported body columns
    pub fn columns_limit(mut self, limit: usize) -> Self {
        self.columns_limit = Some(limit);
        self
    }

    /// Collapse nested headers to the level next to the body
    pub fn first_level_only(mut self) -> Self {
        self.only_first_level = true;
        self
    }

    /// Leave out rows at the given window offsets
    pub fn ignore_rows(mut self, offsets: impl IntoIterator<Item = usize>) -> Self {
        self.ignored_rows.extend(offsets);
        self
    }

    /// Leave out columns at the given window offsets
    pub fn ignore_columns(mut self, offsets: impl IntoIterator<Item = usize>) -> Self {
        self.ignored_columns.extend(offsets);
        self
    }
}
