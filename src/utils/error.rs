//! Error handling for gridclip
//!
//! The codec itself never fails: the resolver clamps and the importer returns
//! `None`. This module covers the fallible edges around it (I/O, loading
//! tabular input, serializing descriptors) and the non-fatal warnings the
//! importer reports.

use std::fmt;

/// Codec error type
#[derive(Debug, Clone)]
pub enum CodecError {
    /// Input could not be parsed
    ParseError {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },
    /// Input parsed but does not describe a table
    InvalidInput { message: String },
    /// Requested input/output format is not available in this build
    UnsupportedFormat {
        format: String,
        suggestion: Option<String>,
    },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::ParseError {
                message,
                line,
                column,
            } => {
                if let (Some(l), Some(c)) = (line, column) {
                    write!(f, "Parse error at line {}, column {}: {}", l, c, message)
                } else if let Some(l) = line {
                    write!(f, "Parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
            CodecError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            CodecError::UnsupportedFormat { format, suggestion } => {
                if let Some(sug) = suggestion {
                    write!(f, "Unsupported format '{}'. {}", format, sug)
                } else {
                    write!(f, "Unsupported format: {}", format)
                }
            }
            CodecError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for CodecError {}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for fallible operations
pub type CodecResult<T> = Result<T, CodecError>;

// Convenience constructors for errors
impl CodecError {
    pub fn parse_at(message: impl Into<String>, line: usize, column: usize) -> Self {
        CodecError::ParseError {
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        CodecError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn unsupported(format: impl Into<String>) -> Self {
        CodecError::UnsupportedFormat {
            format: format.into(),
            suggestion: None,
        }
    }

    pub fn unsupported_with_suggestion(
        format: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        CodecError::UnsupportedFormat {
            format: format.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}

/// Kind of warning generated while importing a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A cell found no vacant slot in its row and was dropped
    DroppedCell,
    /// A span reached past the detected table bounds and was clipped
    ClippedSpan,
    /// A row had fewer cells than the detected column count
    ShortRow,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::DroppedCell => write!(f, "dropped cell"),
            WarningKind::ClippedSpan => write!(f, "clipped span"),
            WarningKind::ShortRow => write!(f, "short row"),
        }
    }
}

/// A non-fatal issue found while importing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecWarning {
    pub kind: WarningKind,
    pub message: String,
    /// Data row the warning refers to
    pub row: Option<usize>,
}

impl CodecWarning {
    pub fn at_row(kind: WarningKind, message: impl Into<String>, row: usize) -> Self {
        CodecWarning {
            kind,
            message: message.into(),
            row: Some(row),
        }
    }
}

impl fmt::Display for CodecWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(r) = self.row {
            write!(f, "Warning at row {}: [{}] {}", r, self.kind, self.message)
        } else {
            write!(f, "Warning: [{}] {}", self.kind, self.message)
        }
    }
}
