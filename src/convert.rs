//! File-level conversion: `<base>.log` in, `<base>.csv` out
//!
//! Drives the extractor over the input one line at a time and hands each
//! record straight to the table writer, so memory use is one line plus
//! the CSV writer's buffer regardless of input size.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::extractor;
use crate::models::ConversionStats;
use crate::writer::TableWriter;

pub const INPUT_EXTENSION: &str = "log";
pub const OUTPUT_EXTENSION: &str = "csv";

/// Derive the input and output paths for a base filename
///
/// The extension is appended to `base` as given, so `run.v2` maps to
/// `run.v2.log`/`run.v2.csv` rather than replacing `.v2`.
pub fn derive_paths(base: impl AsRef<Path>) -> (PathBuf, PathBuf) {
    let base = base.as_ref();
    (with_suffix(base, INPUT_EXTENSION), with_suffix(base, OUTPUT_EXTENSION))
}

fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Convert the log at `input` into a CSV table at `output`
///
/// The input is opened first; if that fails the output is never created.
/// An existing output file is truncated.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionStats> {
    log::debug!("Opening input {}", input.display());
    let reader = File::open(input).map_err(|e| ConvertError::open_input(input, e))?;

    log::debug!("Creating output {}", output.display());
    let writer = File::create(output).map_err(|source| ConvertError::OutputUnwritable {
        path: output.to_path_buf(),
        source,
    })?;

    let stats = convert_stream(BufReader::new(reader), writer)
        .with_context(|| format!("Failed to convert {} to {}", input.display(), output.display()))?;

    log::info!(
        "Scanned {} lines from {}, wrote {} rows to {}",
        stats.lines_read,
        input.display(),
        stats.records_written,
        output.display()
    );

    Ok(stats)
}

/// Stream timing rows from `reader` into a CSV table on `writer`
///
/// The header is always written, even when no line matches. `writer` is
/// flushed before returning.
pub fn convert_stream<R: BufRead, W: Write>(reader: R, writer: W) -> Result<ConversionStats> {
    let mut table = TableWriter::new(writer).context("Failed to write CSV header")?;

    let mut lines_read = 0;
    let mut read_error = None;

    let lines = LossyLines::new(reader)
        .map_while(|line| match line {
            Ok(line) => Some(line),
            Err(e) => {
                read_error = Some(e);
                None
            }
        })
        .inspect(|_| lines_read += 1);

    for record in extractor::extract(lines) {
        log::trace!("Matched {} = {}", record.name, record.value);
        table
            .write(&record)
            .with_context(|| format!("Failed to write row for '{}'", record.name))?;
    }

    if let Some(e) = read_error {
        return Err(e).context("Failed to read input line");
    }

    let records_written = table.rows();
    table.finish().context("Failed to flush CSV output")?;

    Ok(ConversionStats {
        lines_read,
        records_written,
    })
}

/// Line iterator that tolerates invalid UTF-8
///
/// Lines end at `\n`, `\r\n` or a lone `\r`; the terminator is stripped.
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of
/// aborting the whole run.
struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
    // Previous line ended in `\r`; a following `\n` belongs to it
    skip_lf: bool,
}

impl<R: BufRead> LossyLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            skip_lf: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();

        if self.skip_lf {
            self.skip_lf = false;
            if self.reader.fill_buf()?.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }

        let mut read_any = false;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                break;
            }
            read_any = true;

            let (used, terminator) = match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    self.buf.extend_from_slice(&available[..i]);
                    (i + 1, Some(available[i]))
                }
                None => {
                    self.buf.extend_from_slice(available);
                    (available.len(), None)
                }
            };
            self.reader.consume(used);

            match terminator {
                Some(b'\r') => {
                    self.skip_lf = true;
                    break;
                }
                Some(_) => break,
                None => {}
            }
        }

        if !read_any {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}
