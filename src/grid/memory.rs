//! In-memory grid
//!
//! An owned [`GridView`] implementation. It is what imported
//! [`GridSettings`] are applied to, and it backs the CLI and the tests.

use super::settings::{GridSettings, HeaderLabel, MergeCell};
use super::view::{CellMeta, GridView, Selection};

/// Owned grid with optional headers, merged regions and a selection
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    /// Body values, row-major
    data: Vec<Vec<Option<String>>>,
    /// Column-header levels, outermost first; the last level sits next to the body
    header_levels: Vec<Vec<HeaderLabel>>,
    /// Row-header labels
    row_headers: Option<Vec<String>>,
    /// Corner label above the row headers
    corner: String,
    /// Merged regions
    merges: Vec<MergeCell>,
    /// Last selection
    selection: Option<Selection>,
}

impl MemoryGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from rows of values
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let data = rows
            .into_iter()
            .map(|row| row.into_iter().map(|v| Some(v.into())).collect())
            .collect();
        MemoryGrid {
            data,
            ..Self::default()
        }
    }

    /// Apply an imported descriptor to a fresh grid
    pub fn from_settings(settings: &GridSettings) -> Self {
        let mut grid = MemoryGrid {
            data: settings.data.clone().unwrap_or_default(),
            ..Self::default()
        };

        if let Some(ref nested) = settings.nested_headers {
            grid.header_levels = nested.clone();
        } else if let Some(ref headers) = settings.col_headers {
            grid.header_levels = vec![headers.iter().map(|h| HeaderLabel::from(h.as_str())).collect()];
        }

        grid.row_headers = settings.row_headers.clone();
        grid.merges = settings.merge_cells.clone().unwrap_or_default();
        grid
    }

    /// Set a single level of column headers
    pub fn with_col_headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.header_levels = vec![headers
            .into_iter()
            .map(|h| HeaderLabel::Plain(h.into()))
            .collect()];
        self
    }

    /// Set nested column headers, outermost level first
    pub fn with_nested_headers(mut self, levels: Vec<Vec<HeaderLabel>>) -> Self {
        self.header_levels = levels;
        self
    }

    /// Set row-header labels
    pub fn with_row_headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.row_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Set the corner label shown above the row headers
    pub fn with_corner(mut self, corner: impl Into<String>) -> Self {
        self.corner = corner.into();
        self
    }

    /// Add a merged region
    pub fn with_merge(mut self, merge: MergeCell) -> Self {
        self.merges.push(merge);
        self
    }

    /// Record a selection
    pub fn select(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }

    /// Set a body value, growing the grid when needed
    pub fn set_value(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if self.data.len() <= row {
            self.data.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.data[row];
        if cells.len() <= col {
            cells.resize(col + 1, None);
        }
        cells[col] = Some(value.into());
    }

    /// Merged regions of this grid
    pub fn merges(&self) -> &[MergeCell] {
        &self.merges
    }

    fn header_level(&self, level: isize) -> Option<&Vec<HeaderLabel>> {
        if level >= 0 {
            return None;
        }
        let depth = level.unsigned_abs();
        self.header_levels
            .len()
            .checked_sub(depth)
            .and_then(|idx| self.header_levels.get(idx))
    }

    /// Find the header entry covering `col` and the column it starts at
    fn header_entry(&self, level: isize, col: usize) -> Option<(usize, &HeaderLabel)> {
        let entries = self.header_level(level)?;
        let mut start = 0;
        for entry in entries {
            let span = entry.colspan();
            if col < start + span {
                return Some((start, entry));
            }
            start += span;
        }
        None
    }
}

/// Spreadsheet-style column label: A, B, ..., Z, AA, AB, ...
pub fn column_label(col: usize) -> String {
    let mut label = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

impl GridView for MemoryGrid {
    fn count_rows(&self) -> usize {
        self.data.len()
    }

    fn count_cols(&self) -> usize {
        let body = self.data.iter().map(Vec::len).max().unwrap_or(0);
        if body > 0 {
            return body;
        }
        self.header_levels
            .iter()
            .map(|level| level.iter().map(HeaderLabel::colspan).sum())
            .max()
            .unwrap_or(0)
    }

    fn has_row_headers(&self) -> bool {
        self.row_headers.is_some()
    }

    fn has_col_headers(&self) -> bool {
        !self.header_levels.is_empty()
    }

    fn column_header_levels(&self) -> usize {
        self.header_levels.len()
    }

    fn cell_value(&self, row: usize, col: usize) -> Option<String> {
        self.data.get(row)?.get(col)?.clone()
    }

    fn get_cell_meta(&self, row: usize, col: usize) -> CellMeta {
        for merge in &self.merges {
            if merge.is_anchor(row, col) {
                return CellMeta::merged(merge.rowspan, merge.colspan);
            }
            if merge.covers(row, col) {
                return CellMeta::hidden();
            }
        }
        CellMeta::default()
    }

    fn get_col_header(&self, col: usize, level: isize) -> String {
        match self.header_entry(level, col) {
            Some((_, entry)) => entry.label().to_string(),
            None if self.header_levels.is_empty() => column_label(col),
            None => String::new(),
        }
    }

    fn get_row_header(&self, row: isize) -> String {
        if row < 0 {
            return self.corner.clone();
        }
        let idx = row.unsigned_abs();
        match self.row_headers {
            Some(ref labels) => labels.get(idx).cloned().unwrap_or_default(),
            None => (idx + 1).to_string(),
        }
    }

    fn header_colspan(&self, level: isize, col: usize) -> Option<usize> {
        let (start, entry) = self.header_entry(level, col)?;
        (start == col && entry.colspan() > 1).then(|| entry.colspan())
    }

    fn get_selected_last(&self) -> Option<Selection> {
        self.selection
    }
}
