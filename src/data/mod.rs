//! Data layer - static tables and markup constants

pub mod entities;

pub use entities::{lookup_entity, ESCAPED_HTML_CHARS};
