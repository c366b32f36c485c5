//! Raw markup preprocessing
//!
//! Pasted markup often wraps cell text in `<span>`, `<font>` or `<p>` tags.
//! Before parsing, every `<td>` interior is reduced to text plus line-break
//! tags so the cell's inner markup is exactly what the normalizer expects.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// A complete `<td ...>...</td>` element (non-greedy, spans lines)
    static ref TD_ELEMENT: Regex = Regex::new(r"(?i)(<td\b[^>]*?>)([\s\S]*?)<\/\s*td>").unwrap();

    /// Any tag
    static ref ANY_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Strip every tag except line breaks from the interior of each `<td>`
pub fn strip_cell_markup(html: &str) -> String {
    TD_ELEMENT
        .replace_all(html, |caps: &Captures| {
            format!("{}{}</td>", &caps[1], strip_tags_except_br(&caps[2]))
        })
        .into_owned()
}

/// Remove tags that do not start with `br` (case-insensitive)
fn strip_tags_except_br(fragment: &str) -> String {
    ANY_TAG
        .replace_all(fragment, |caps: &Captures| {
            let tag = &caps[0];
            let is_line_break = tag
                .get(1..3)
                .is_some_and(|name| name.eq_ignore_ascii_case("br"));
            if is_line_break {
                tag.to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_nested_tags() {
        assert_eq!(
            strip_cell_markup("<td class=\"x\"><span style=\"a\">hello</span> <b>world</b></td>"),
            "<td class=\"x\">hello world</td>"
        );
    }

    #[test]
    fn test_keeps_line_breaks() {
        assert_eq!(
            strip_cell_markup("<td><p>a<br>b<BR/></p></td>"),
            "<td>a<br>b<BR/></td>"
        );
    }

    #[test]
    fn test_space_run_span_is_unwrapped() {
        assert_eq!(
            strip_cell_markup("<td>a<span style=\"mso-spacerun: yes\">&nbsp;&nbsp; </span>b</td>"),
            "<td>a&nbsp;&nbsp; b</td>"
        );
    }

    #[test]
    fn test_leaves_other_elements_alone() {
        let html = "<table><tr><th><b>H</b></th><td>x</td></tr></table>";
        assert_eq!(
            strip_cell_markup(html),
            "<table><tr><th><b>H</b></th><td>x</td></tr></table>"
        );
    }

    #[test]
    fn test_multiline_cells() {
        assert_eq!(
            strip_cell_markup("<td>\n<div>a</div>\n</ td>"),
            "<td>\na\n</td>"
        );
    }
}
