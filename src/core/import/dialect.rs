//! Source-application dialects
//!
//! Excel writes cell text with source-level line wrapping and indentation,
//! so its cells are normalized differently from everyone else's. The dialect
//! is detected from the generator `<meta>` tag, but can also be forced through
//! [`ImportOptions`](super::ImportOptions).

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};

use crate::core::codec::decode_html_entities;

lazy_static! {
    /// `<meta name="Generator">`, `<meta name="ProgId-Generator">`, ...
    static ref GENERATOR_SELECTOR: Selector = Selector::parse(r#"meta[name$="enerator"]"#).unwrap();

    /// A source newline followed by up to two indentation spaces
    static ref EXCEL_SOURCE_WRAP: Regex = Regex::new(r"[\r\n]\x20{0,2}").unwrap();

    /// A line-break tag with its trailing newline and up to three indentation spaces
    static ref EXCEL_LINE_BREAK: Regex = Regex::new(r"(?i)<br\b[^>]*>[\r\n]?\x20{0,3}").unwrap();

    /// A line-break tag with an optional trailing newline
    static ref LINE_BREAK_TAG: Regex = Regex::new(r"(?i)<br\b[^>]*>[\r\n]?").unwrap();
}

/// Whitespace dialect of pasted markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Browsers, Google Sheets, hand-written markup
    #[default]
    Generic,
    /// Microsoft Excel
    Excel,
}

impl Dialect {
    /// Name used in logs and the CLI
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::Excel => "excel",
        }
    }
}

/// Find the generator named by the document's `<meta>` tags, if any
pub fn generator_of(doc: &Html) -> Option<String> {
    doc.select(&GENERATOR_SELECTOR)
        .next()
        .map(|meta| meta.value().attr("content").unwrap_or_default().to_string())
}

/// Decide the dialect of a parsed document from its generator marker
pub fn detect_dialect(doc: &Html) -> Dialect {
    match generator_of(doc) {
        Some(generator) if generator.to_ascii_lowercase().contains("excel") => Dialect::Excel,
        _ => Dialect::Generic,
    }
}

/// Turn a cell's inner markup into its plain value.
///
/// Line-break tags become CRLF (with dialect-specific whitespace collapsing)
/// and the four named entities are decoded.
pub fn normalize_cell_text(inner_html: &str, dialect: Dialect) -> String {
    let text = match dialect {
        Dialect::Excel => {
            let unwrapped = EXCEL_SOURCE_WRAP.replace_all(inner_html, " ");
            EXCEL_LINE_BREAK.replace_all(&unwrapped, "\r\n").into_owned()
        }
        Dialect::Generic => LINE_BREAK_TAG.replace_all(inner_html, "\r\n").into_owned(),
    };

    decode_html_entities(&text)
}
