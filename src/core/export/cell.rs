//! Markup cells and rows for table export

use std::fmt::Write;

/// Represents a single exported table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlCell {
    /// Cell content, already encoded for the markup dialect
    pub content: String,
    /// Number of rows this cell spans
    pub rowspan: usize,
    /// Number of columns this cell spans
    pub colspan: usize,
    /// Whether the cell is a header (`<th>`) cell
    pub is_header: bool,
}

impl HtmlCell {
    /// Create a data cell with encoded content
    pub fn new(content: String) -> Self {
        HtmlCell {
            content,
            rowspan: 1,
            colspan: 1,
            is_header: false,
        }
    }

    /// Create a header cell with encoded content
    pub fn header(content: String) -> Self {
        HtmlCell {
            is_header: true,
            ..HtmlCell::new(content)
        }
    }

    /// Set the row and column spans
    pub fn with_spans(mut self, rowspan: usize, colspan: usize) -> Self {
        self.rowspan = rowspan;
        self.colspan = colspan;
        self
    }

    fn tag(&self) -> &'static str {
        if self.is_header {
            "th"
        } else {
            "td"
        }
    }

    /// Generate the markup for this cell; spans of one or less are omitted
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        let _ = write!(output, "<{}", self.tag());
        if self.rowspan > 1 {
            let _ = write!(output, " rowspan=\"{}\"", self.rowspan);
        }
        if self.colspan > 1 {
            let _ = write!(output, " colspan=\"{}\"", self.colspan);
        }
        let _ = write!(output, ">{}</{}>", self.content, self.tag());
        output
    }
}

/// Represents an exported table row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlRow {
    /// Cells in this row
    pub cells: Vec<HtmlCell>,
}

impl HtmlRow {
    /// Create a new empty row
    pub fn new() -> Self {
        HtmlRow { cells: Vec::new() }
    }

    /// Append a cell
    pub fn push(&mut self, cell: HtmlCell) {
        self.cells.push(cell);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Generate the `<tr>` markup for this row
    pub fn to_html(&self) -> String {
        let mut output = String::from("<tr>");
        for cell in &self.cells {
            output.push_str(&cell.to_html());
        }
        output.push_str("</tr>");
        output
    }
}
