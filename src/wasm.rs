//! WASM bindings for gridclip
//!
//! This module provides JavaScript-accessible functions for reading and
//! writing clipboard table markup.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{
    array_to_table, decode_html_entities, encode_html_entities, import_table_with_diagnostics,
    instance_to_html, Dialect, GridSettings, ImportOptions, MemoryGrid,
};

/// A cell value as JavaScript hands it over
#[cfg(feature = "wasm")]
#[derive(Deserialize)]
#[serde(untagged)]
pub enum JsCell {
    Text(String),
    Number(f64),
    Bool(bool),
}

#[cfg(feature = "wasm")]
impl JsCell {
    fn into_text(self) -> String {
        match self {
            JsCell::Text(text) => text,
            JsCell::Number(n) => n.to_string(),
            JsCell::Bool(b) => b.to_string(),
        }
    }
}

/// Import options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct JsImportOptions {
    /// `"excel"` or `"generic"`; detected from the markup when absent
    #[serde(default)]
    pub dialect: Option<String>,
}

/// Import result with warnings
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct ImportResult {
    /// The grid descriptor, absent when the markup has no table
    pub settings: Option<GridSettings>,
    /// Whether a table was found
    pub success: bool,
    /// Warnings during import
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert a 2D array of values into clipboard HTML
///
/// `null` and `undefined` become empty cells. Anything that is not an array of
/// arrays yields `<table></table>`.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "arrayToTable")]
pub fn array_to_table_wasm(rows: JsValue) -> String {
    let rows: Vec<Vec<Option<JsCell>>> = serde_wasm_bindgen::from_value(rows).unwrap_or_default();
    let rows: Vec<Vec<Option<String>>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(|cell| cell.map(JsCell::into_text)).collect())
        .collect();
    array_to_table(rows)
}

/// Parse clipboard HTML into a grid-settings object, or `null` without a table
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "importTable")]
pub fn import_table_wasm(html: &str) -> JsValue {
    match crate::import_table(html) {
        Some(settings) => serde_wasm_bindgen::to_value(&settings).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

/// Parse clipboard HTML with options, reporting warnings
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "importTableWithOptions")]
pub fn import_table_with_options_wasm(html: &str, options: JsValue) -> JsValue {
    let opts: JsImportOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let options = ImportOptions {
        dialect: match opts.dialect.as_deref() {
            Some("excel") => Some(Dialect::Excel),
            Some("generic") => Some(Dialect::Generic),
            _ => None,
        },
    };

    let result = match import_table_with_diagnostics(html, &options) {
        Some(output) => ImportResult {
            settings: Some(output.settings),
            success: true,
            warnings: output.warnings.iter().map(ToString::to_string).collect(),
        },
        None => ImportResult {
            settings: None,
            success: false,
            warnings: Vec::new(),
        },
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Export a grid-settings object (as returned by `importTable`) back to HTML
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "settingsToTable")]
pub fn settings_to_table_wasm(settings: JsValue) -> String {
    let settings: GridSettings = serde_wasm_bindgen::from_value(settings).unwrap_or_default();
    instance_to_html(&MemoryGrid::from_settings(&settings))
}

/// Escape a cell value for clipboard HTML
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "encodeHtmlEntities")]
pub fn encode_html_entities_wasm(text: &str) -> String {
    encode_html_entities(text)
}

/// Decode the named entities clipboard HTML uses
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "decodeHtmlEntities")]
pub fn decode_html_entities_wasm(text: &str) -> String {
    decode_html_entities(text)
}

/// Detect the payload format (`html`, `json`, `tsv`, `csv` or `unknown`)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectFormat")]
pub fn detect_format_wasm(input: &str) -> String {
    crate::detect_format(input).to_string()
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
