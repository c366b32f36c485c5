//! HTML entity mappings and markup constants
//!
//! This module holds the fixed dictionary shared by both directions of the
//! clipboard codec, plus the literal markup fragments spreadsheet applications
//! expect on paste.

use phf::phf_map;

/// Named entity to literal character mapping
/// Used when decoding pasted cell content. `&nbsp;` maps to a plain space.
pub static ESCAPED_HTML_CHARS: phf::Map<&'static str, &'static str> = phf_map! {
    "&nbsp;" => " ",
    "&amp;" => "&",
    "&lt;" => "<",
    "&gt;" => ">",
};

/// Canonical line break emitted inside a cell
pub const LINE_BREAK: &str = "<br>\r\n";

/// Opening tag of the space-run wrapper recognised by Excel and LibreOffice
pub const SPACE_RUN_OPEN: &str = "<span style=\"mso-spacerun: yes\">";

/// Closing tag of the space-run wrapper
pub const SPACE_RUN_CLOSE: &str = "</span>";

/// Non-breaking space entity
pub const NBSP: &str = "&nbsp;";

/// Numeric tab entity
pub const TAB_ENTITY: &str = "&#9;";

/// Style marker Excel puts on cells whose colspan is purely visual
pub const IGNORE_COLSPAN_STYLE: &str = "mso-ignore:colspan";

/// Look up the literal character for a named entity (case-insensitive)
pub fn lookup_entity(entity: &str) -> Option<&'static str> {
    ESCAPED_HTML_CHARS
        .get(entity)
        .or_else(|| ESCAPED_HTML_CHARS.get(entity.to_ascii_lowercase().as_str()))
        .copied()
}
