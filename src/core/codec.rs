//! Escaping codec shared by the exporters and the importer
//!
//! Encoding prepares a plain cell value for a clipboard `<td>`; decoding turns
//! the four named entities of [`ESCAPED_HTML_CHARS`] back into literal
//! characters.
//!
//! [`ESCAPED_HTML_CHARS`]: crate::data::entities::ESCAPED_HTML_CHARS

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::data::entities::{lookup_entity, LINE_BREAK, NBSP, SPACE_RUN_CLOSE, SPACE_RUN_OPEN, TAB_ENTITY};

lazy_static! {
    /// Any line break: an existing `<br>` tag (optionally followed by a newline) or a bare newline
    static ref LINE_BREAK_PATTERN: Regex =
        Regex::new(r"(?i)<br(\s*|/)>(\r\n|\n|\r)?|\r\n|\n|\r").unwrap();

    /// Two or more consecutive spaces
    static ref SPACE_RUN_PATTERN: Regex = Regex::new(r"\x20{2,}").unwrap();

    /// The four named entities of the escaping dictionary
    static ref ENTITY_PATTERN: Regex = Regex::new(r"(?i)&nbsp;|&amp;|&lt;|&gt;").unwrap();
}

/// Encode a cell value for the clipboard markup dialect.
///
/// Line breaks are normalized to `<br>\r\n`, `&`, `<` and `>` are escaped,
/// runs of spaces are wrapped in an `mso-spacerun` span and tabs become `&#9;`.
///
/// # Example
///
/// ```rust
/// use gridclip::encode_html_entities;
///
/// assert_eq!(encode_html_entities("a<b"), "a&lt;b");
/// assert_eq!(encode_html_entities("x\ny"), "x<br>\r\ny");
/// ```
pub fn encode_html_entities(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    // Split on line breaks first so that existing `<br>` tags survive escaping
    for m in LINE_BREAK_PATTERN.find_iter(text) {
        encode_segment(&text[last..m.start()], &mut output);
        output.push_str(LINE_BREAK);
        last = m.end();
    }
    encode_segment(&text[last..], &mut output);

    output
}

fn encode_segment(segment: &str, output: &mut String) {
    if segment.is_empty() {
        return;
    }

    let escaped = segment
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    let spaced = SPACE_RUN_PATTERN.replace_all(&escaped, |caps: &Captures| {
        let run = caps[0].len();
        format!("{}{} {}", SPACE_RUN_OPEN, NBSP.repeat(run - 1), SPACE_RUN_CLOSE)
    });

    output.push_str(&spaced.replace('\t', TAB_ENTITY));
}

/// Decode the four named entities (`&nbsp;`, `&amp;`, `&lt;`, `&gt;`), case-insensitively.
///
/// Every other entity is left untouched.
pub fn decode_html_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            lookup_entity(&caps[0]).unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Encode an optional cell value; `None` and empty strings both produce an empty cell body.
pub fn encode_cell_value(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => encode_html_entities(v),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escapes_angle_brackets() {
        assert_eq!(encode_html_entities("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn test_escapes_every_occurrence() {
        // Only the first bracket used to be escaped in the grid exporter;
        // both exporters now escape globally.
        assert_eq!(encode_html_entities("a<b<c>d>e"), "a&lt;b&lt;c&gt;d&gt;e");
    }

    #[test]
    fn test_escapes_ampersand_once() {
        assert_eq!(encode_html_entities("AT&T"), "AT&amp;T");
        assert_eq!(encode_html_entities("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(encode_html_entities("a\nb"), "a<br>\r\nb");
        assert_eq!(encode_html_entities("a\r\nb"), "a<br>\r\nb");
        assert_eq!(encode_html_entities("a\rb"), "a<br>\r\nb");
        assert_eq!(encode_html_entities("a<br>\nb"), "a<br>\r\nb");
        assert_eq!(encode_html_entities("a<BR/>b"), "a<br>\r\nb");
        assert_eq!(encode_html_entities("a<br >\r\nb"), "a<br>\r\nb");
    }

    #[test]
    fn test_space_runs() {
        assert_eq!(
            encode_html_entities("a   b"),
            "a<span style=\"mso-spacerun: yes\">&nbsp;&nbsp; </span>b"
        );
        assert_eq!(encode_html_entities("a b"), "a b");
        assert_eq!(
            encode_html_entities("  "),
            "<span style=\"mso-spacerun: yes\">&nbsp; </span>"
        );
    }

    #[test]
    fn test_tabs() {
        assert_eq!(encode_html_entities("a\tb"), "a&#9;b");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_html_entities("&lt;b&gt; &amp; c"), "<b> & c");
        assert_eq!(decode_html_entities("&NBSP;&Amp;"), " &");
        assert_eq!(decode_html_entities("&quot;x&quot;"), "&quot;x&quot;");
    }

    #[test]
    fn test_decode_space_run_entities() {
        assert_eq!(decode_html_entities("a&nbsp;&nbsp; b"), "a   b");
    }

    #[test]
    fn test_encode_cell_value() {
        assert_eq!(encode_cell_value(None), "");
        assert_eq!(encode_cell_value(Some("")), "");
        assert_eq!(encode_cell_value(Some("x>y")), "x&gt;y");
    }
}
