//! Test utilities for the line and file models

use crate::config::CsvConfig;
use crate::model::CsvLine;

mod line_tests;

/// Default dialect used throughout the model tests
pub fn test_config() -> CsvConfig {
    CsvConfig::default()
}

/// Build a line from string literals
pub fn line_of(fields: &[&str]) -> CsvLine {
    CsvLine::new(fields.iter().map(|f| f.to_string()).collect())
}

/// A small two-column document used by several tests
pub fn sample_document() -> String {
    "\"1001\",\"Heathrow\"\n\"1002\",\"Gatwick\"\n\"1003\",\"Stansted\"\n".to_string()
}
