//! csvdoc
//!
//! An in-memory model for CSV-formatted text: parsing raw documents into
//! structured lines and fields, editing them in place, and serializing them
//! back to valid CSV text.
//!
//! This library provides tools for:
//! - Quote-aware splitting of raw CSV lines into ordered field lists
//! - An always-quoting field codec with context-free output
//! - Line and file models with positional and named-column access
//! - Round-trip document serialization with line-terminator normalization
//! - Sequential or concurrent per-line batch transformation with
//!   input-order reassembly
//!
//! Parsing never fails: malformed input (unbalanced quotes, empty content)
//! produces a best-effort, structurally valid result rather than an error.
//! Errors are reserved for the filesystem boundary and the batch processor.

pub mod config;

pub mod codec {
    pub mod field;
    pub mod splitter;

    pub use field::{decode_field, encode_field};
    pub use splitter::split_line;

    #[cfg(test)]
    mod tests;
}

pub mod model {
    pub mod column;
    pub mod file;
    pub mod line;

    pub use column::ColumnKey;
    pub use file::CsvFile;
    pub use line::CsvLine;

    #[cfg(test)]
    mod tests;
}

pub mod batch {
    pub mod processor;

    pub use processor::{BatchMode, process_file, process_lines};
}

// Re-export commonly used types
pub use batch::{BatchMode, process_file, process_lines};
pub use config::CsvConfig;
pub use model::{ColumnKey, CsvFile, CsvLine};

/// Result type alias for csvdoc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CSV document operations
///
/// Parsing and serialization never produce errors; these variants cover the
/// filesystem boundary, configuration validation, and batch processing.
/// Out-of-range positional access is a precondition violation and panics
/// (see [`model::line::CsvLine`]) rather than appearing here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File bytes are not valid UTF-8 text
    #[error("Encoding error in file '{path}': not valid UTF-8")]
    Encoding {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A per-line transformation in a batch failed
    #[error("Batch processing failed at line {index}: {message}")]
    BatchTask { index: usize, message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an encoding error for a file path
    pub fn encoding(path: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a batch task failure for the line at `index`
    pub fn batch_task(index: usize, message: impl Into<String>) -> Self {
        Self::BatchTask {
            index,
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::Encoding {
            path: "unknown".to_string(),
            source: error,
        }
    }
}
