//! pentagon-timings: benchmark timing extraction from log files
//!
//! Scans a log for lines reporting `pentagonChildren_*` benchmark timings
//! and writes them as a two-column CSV table, one row per matching line,
//! in input order.
//!
//! # Architecture
//!
//! - **Extractor**: Matches each line against a fixed pattern; yields `TimingRecord`s lazily
//! - **Writer**: Serializes records as CSV under a fixed header
//! - **Convert**: Derives `<base>.log`/`<base>.csv` and streams one into the other
//!
//! # Example Usage
//!
//! ```
//! use pentagon_timings::convert_stream;
//!
//! let log = "INFO -- pentagonChildren_buildTree: 123.456000 microseconds\nidle\n";
//! let mut csv = Vec::new();
//! let stats = convert_stream(log.as_bytes(), &mut csv).unwrap();
//!
//! assert_eq!(stats.records_written, 1);
//! assert!(String::from_utf8(csv).unwrap().contains("buildTree,123.456000"));
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod extractor;
pub mod models;
pub mod output;
pub mod writer;

// Re-export commonly used types
pub use convert::{convert_file, convert_stream, derive_paths};
pub use error::ConvertError;
pub use extractor::{extract, parse_line};
pub use models::{ConversionStats, TimingRecord};
pub use writer::TableWriter;
