//! Core data models for pentagon-timings
//!
//! A `TimingRecord` lives only as long as it takes to move one matched log
//! line into one CSV row; nothing is aggregated or retained.

use serde::{Deserialize, Serialize};

/// One benchmark timing extracted from a log line
///
/// `value` is kept as the exact text matched in the log (`\d+\.\d+`), so
/// `0.0500` is written back out as `0.0500`, never reformatted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingRecord {
    /// Function name following the `pentagonChildren_` prefix
    #[serde(rename = "Function Name")]
    pub name: String,
    /// Elapsed time in microseconds, verbatim
    #[serde(rename = "Time (microseconds)")]
    pub value: String,
}

impl TimingRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Summary of a single conversion run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionStats {
    /// Number of input lines scanned
    pub lines_read: usize,
    /// Number of data rows written (header excluded)
    pub records_written: usize,
}
