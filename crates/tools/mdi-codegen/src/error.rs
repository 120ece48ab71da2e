//! Error types for the icon header generator.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading a codepoint table or emitting a header.
#[derive(Debug)]
pub enum CodegenError {
    /// The codepoint table could not be read.
    ReadTable {
        /// Path of the table.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// I/O error writing the generated header.
    Write(io::Error),
    /// A table line is not of the form `<name> <codepoint>`.
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
    /// A codepoint field is not hexadecimal or not a Unicode scalar value.
    InvalidCodepoint {
        /// 1-based line number.
        line: usize,
        /// The offending codepoint text.
        text: String,
    },
    /// The table has no entries, so it has no bounds.
    EmptyTable,
    /// The macro prefix is not a valid C identifier.
    InvalidPrefix(String),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadTable { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Write(e) => write!(f, "header write error: {e}"),
            Self::MalformedLine { line, content } => {
                write!(f, "line {line}: expected `<name> <codepoint>`, got {content:?}")
            }
            Self::InvalidCodepoint { line, text } => {
                write!(f, "line {line}: invalid codepoint {text:?}")
            }
            Self::EmptyTable => write!(f, "codepoint table is empty"),
            Self::InvalidPrefix(prefix) => {
                write!(f, "macro prefix {prefix:?} is not a valid identifier")
            }
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadTable { source, .. } => Some(source),
            Self::Write(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodegenError {
    fn from(e: io::Error) -> Self {
        Self::Write(e)
    }
}
