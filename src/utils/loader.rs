//! Tabular input loading
//!
//! Reads TSV, CSV or a JSON array of arrays into rows of optional cell text,
//! ready for [`array_to_table`](crate::export::array_to_table).

use std::path::Path;

use log::debug;
use serde_json::Value;

use super::error::{CodecError, CodecResult};

/// Rows of optional cell values; `None` is an empty cell
pub type Rows = Vec<Vec<Option<String>>>;

/// Supported tabular input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Tab-separated, as spreadsheets put on the clipboard
    Tsv,
    Csv,
    /// `[["a", 1], [null, true]]`
    Json,
}

impl InputFormat {
    /// Parse a format name (`tsv`, `csv`, `json`)
    pub fn from_name(name: &str) -> CodecResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "tsv" | "tab" | "txt" => Ok(InputFormat::Tsv),
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            "xlsx" | "xls" | "ods" => Err(CodecError::unsupported_with_suggestion(
                name,
                "Save the sheet as CSV or copy the cells as TSV first",
            )),
            _ => Err(CodecError::unsupported(name)),
        }
    }

    /// Guess the format from a file extension, defaulting to TSV
    pub fn from_path(path: &Path) -> CodecResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => Self::from_name(ext),
            None => Ok(InputFormat::Tsv),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Tsv => "tsv",
            InputFormat::Csv => "csv",
            InputFormat::Json => "json",
        }
    }
}

/// Load rows from `input` in the given format
pub fn load_rows(input: &str, format: InputFormat) -> CodecResult<Rows> {
    let rows = match format {
        InputFormat::Tsv => load_delimited(input, b'\t')?,
        InputFormat::Csv => load_delimited(input, b',')?,
        InputFormat::Json => load_json(input)?,
    };

    debug!("loaded {} row(s) of {} input", rows.len(), format.name());
    Ok(rows)
}

fn load_delimited(input: &str, delimiter: u8) -> CodecResult<Rows> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        // Spreadsheet selections are ragged when trailing cells are empty
        .flexible(true)
        .from_reader(input.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|err| map_csv_error(err, index + 1))?;
        rows.push(record.iter().map(|field| Some(field.to_string())).collect());
    }

    Ok(rows)
}

fn map_csv_error(err: csv::Error, fallback_line: usize) -> CodecError {
    let message = err.to_string();
    let line = err
        .position()
        .and_then(|pos| usize::try_from(pos.line()).ok())
        .filter(|line| *line > 0)
        .unwrap_or(fallback_line);

    match err.into_kind() {
        csv::ErrorKind::Io(io) => io.into(),
        _ => CodecError::ParseError {
            message,
            line: Some(line),
            column: None,
        },
    }
}

fn load_json(input: &str) -> CodecResult<Rows> {
    let value: Value = serde_json::from_str(input)
        .map_err(|err| CodecError::parse_at(err.to_string(), err.line(), err.column()))?;

    let Value::Array(rows) = value else {
        return Err(CodecError::invalid("expected a JSON array of rows"));
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Array(cells) => Ok(cells.into_iter().map(json_cell_text).collect()),
            other => Err(CodecError::invalid(format!(
                "row {} is {}, expected an array",
                index,
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_cell_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
