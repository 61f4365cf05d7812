//! Error types for reading and writing surface files.

use std::path::PathBuf;

use disc_geometry::GeometryError;
use thiserror::Error;

/// Result type for surface I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing surface files.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A point record could not be parsed.
    #[error("malformed record on line {line}: {message}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the record.
        message: String,
    },

    /// Invalid file content outside of point records.
    #[error("invalid content on line {line}: {message}")]
    InvalidContent {
        /// 1-based line number.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// Valid input that this crate does not handle.
    #[error("unsupported input: {message}")]
    Unsupported {
        /// What is not supported.
        message: String,
    },

    /// An XML document could not be written.
    #[error("failed to write XML: {message}")]
    Xml {
        /// What the XML writer reported.
        message: String,
    },

    /// Geometry validation failed on data read from a file.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create a `MalformedRecord` error.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Create an `InvalidContent` error.
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }

    /// Create an `Unsupported` error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Create an `Xml` error from anything the XML writer reports.
    pub fn xml(error: impl std::fmt::Display) -> Self {
        Self::Xml {
            message: error.to_string(),
        }
    }

    /// Maps a failed `File::open` to `FileNotFound` where that applies.
    pub(crate) fn from_open(error: std::io::Error, path: &std::path::Path) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(error)
        }
    }
}
