//! Grid-settings descriptor produced by the importer

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A merged region anchored at `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergeCell {
    pub row: usize,
    pub col: usize,
    pub rowspan: usize,
    pub colspan: usize,
}

impl MergeCell {
    pub fn new(row: usize, col: usize, rowspan: usize, colspan: usize) -> Self {
        MergeCell {
            row,
            col,
            rowspan,
            colspan,
        }
    }

    /// Whether `(row, col)` lies inside this region
    pub fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.rowspan
            && col >= self.col
            && col < self.col + self.colspan
    }

    /// Whether `(row, col)` is the anchor of this region
    pub fn is_anchor(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}

/// One entry of a nested-header level
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum HeaderLabel {
    /// A header covering a single column
    Plain(String),
    /// A header covering several columns
    Spanning { label: String, colspan: usize },
}

impl HeaderLabel {
    /// The label text
    pub fn label(&self) -> &str {
        match self {
            HeaderLabel::Plain(label) => label,
            HeaderLabel::Spanning { label, .. } => label,
        }
    }

    /// Number of columns covered
    pub fn colspan(&self) -> usize {
        match self {
            HeaderLabel::Plain(_) => 1,
            HeaderLabel::Spanning { colspan, .. } => (*colspan).max(1),
        }
    }
}

impl From<&str> for HeaderLabel {
    fn from(label: &str) -> Self {
        HeaderLabel::Plain(label.to_string())
    }
}

/// Everything needed to configure a fresh grid from pasted HTML.
///
/// Absent fields mean "not present in the source table". In `data`, `None`
/// marks a slot covered by a merged region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridSettings {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<Vec<Vec<Option<String>>>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub merge_cells: Option<Vec<MergeCell>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub col_headers: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub nested_headers: Option<Vec<Vec<HeaderLabel>>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub row_headers: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fixed_rows_top: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fixed_rows_bottom: Option<usize>,
}

impl GridSettings {
    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    /// Number of data columns (width of the widest row)
    pub fn col_count(&self) -> usize {
        self.data
            .as_ref()
            .and_then(|rows| rows.iter().map(Vec::len).max())
            .unwrap_or(0)
    }

    /// Whether the descriptor carries any column-header information
    pub fn has_col_headers(&self) -> bool {
        self.col_headers.is_some() || self.nested_headers.is_some()
    }
}
