//! Plain two-dimensional array to HTML table
//!
//! No headers, merges or hidden cells: every row becomes a `<tr>`, every value
//! a `<td>`, and the rows always sit in a single `<tbody>`.

use log::debug;

use super::cell::{HtmlCell, HtmlRow};
use super::generator::TableMarkupGenerator;
use crate::core::codec::encode_cell_value;

/// Anything that can be exported as the text of a cell
pub trait CellText {
    /// The cell text; `None` renders as an empty cell
    fn cell_text(&self) -> Option<&str>;
}

impl CellText for String {
    fn cell_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl CellText for str {
    fn cell_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: CellText> CellText for Option<T> {
    fn cell_text(&self) -> Option<&str> {
        self.as_ref().and_then(CellText::cell_text)
    }
}

impl<T: CellText + ?Sized> CellText for &T {
    fn cell_text(&self) -> Option<&str> {
        (**self).cell_text()
    }
}

/// Convert a two-dimensional array of values into an HTML table
///
/// # Example
///
/// ```rust
/// use gridclip::array_to_table;
///
/// let html = array_to_table(vec![vec!["A1", "B1"], vec!["A2", "B2"]]);
/// assert_eq!(
///     html,
///     "<table><tbody><tr><td>A1</td><td>B1</td></tr><tr><td>A2</td><td>B2</td></tr></tbody></table>"
/// );
/// ```
pub fn array_to_table<R, V>(rows: R) -> String
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = V>,
    V: CellText,
{
    let mut gen = TableMarkupGenerator::new();
    gen.always_body = true;

    for values in rows {
        let mut row = HtmlRow::new();
        for value in values {
            row.push(HtmlCell::new(encode_cell_value(value.cell_text())));
        }
        gen.push_row(row);
    }

    debug!("exported array with {} row(s)", gen.body_rows.len());

    gen.generate_html()
}
