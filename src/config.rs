//! Configuration management and validation.
//!
//! Provides the dialect configuration for parsing and serialization. The
//! only tunable is the field delimiter; the quote character and line
//! terminator are fixed parts of the wire format.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// The quote character enclosing every encoded field
pub const QUOTE: char = '"';

/// The default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// The canonical line terminator emitted on output
pub const LINE_TERMINATOR: char = '\n';

/// The two-character terminator accepted on input and normalized away
pub const CARRIAGE_RETURN_TERMINATOR: &str = "\r\n";

/// Dialect configuration for CSV parsing and serialization
///
/// # Example
///
/// ```rust
/// use csvdoc::CsvConfig;
///
/// let config = CsvConfig::default().with_delimiter(';');
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Character separating fields within a line
    pub delimiter: char,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl CsvConfig {
    /// Create a configuration with the default comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Validate the configuration
    ///
    /// The delimiter must not collide with the quote character or a line
    /// terminator, since both have fixed meanings in the wire format.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == QUOTE {
            return Err(Error::configuration(
                "delimiter must not be the quote character",
            ));
        }
        if self.delimiter == LINE_TERMINATOR || self.delimiter == '\r' {
            return Err(Error::configuration(
                "delimiter must not be a line-terminator character",
            ));
        }

        debug!("Validated CSV configuration: delimiter={:?}", self.delimiter);
        Ok(())
    }
}
