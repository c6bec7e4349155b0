//! CSV table output
//!
//! Rows are comma-separated and quoted only when needed: a field containing a
//! comma, a double quote, `\r` or `\n` is wrapped in quotes with embedded
//! quotes doubled. Reading the table back with any RFC 4180 parser yields the
//! original field text.

use std::io::{self, Write};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::models::TimingRecord;

/// Header row written at the top of every table
pub const HEADER: [&str; 2] = ["Function Name", "Time (microseconds)"];

/// Rows end in `\r\n` on every platform
const ROW_TERMINATOR: Terminator = Terminator::CRLF;

/// Streams timing records into a two-column CSV table
///
/// The header is written as soon as the writer is created, so a table
/// with no data rows is still a valid table.
pub struct TableWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> TableWriter<W> {
    /// Wrap `dest` and write the header row
    pub fn new(dest: W) -> csv::Result<Self> {
        let mut inner = WriterBuilder::new()
            .has_headers(false)
            .delimiter(b',')
            .quote_style(QuoteStyle::Necessary)
            .terminator(ROW_TERMINATOR)
            .from_writer(dest);
        inner.write_record(HEADER)?;

        Ok(Self { inner, rows: 0 })
    }

    /// Append one row
    pub fn write(&mut self, record: &TimingRecord) -> csv::Result<()> {
        self.inner
            .write_record([record.name.as_str(), record.value.as_str()])?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and hand back the destination
    pub fn finish(self) -> io::Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| e.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nl() -> &'static str {
        "\r\n"
    }

    fn render(records: &[TimingRecord]) -> String {
        let mut writer = TableWriter::new(Vec::new()).unwrap();
        for record in records {
            writer.write(record).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_header_only() {
        assert_eq!(render(&[]), format!("Function Name,Time (microseconds){}", nl()));
    }

    #[test]
    fn test_rows_in_insertion_order() {
        let out = render(&[
            TimingRecord::new("zeta", "2.0"),
            TimingRecord::new("alpha", "1.0"),
        ]);
        let expected = ["Function Name,Time (microseconds)", "zeta,2.0", "alpha,1.0", ""].join(nl());
        assert_eq!(out, expected);
    }

    #[test]
    fn test_value_not_reformatted() {
        let out = render(&[TimingRecord::new("f", "0.0500")]);
        assert!(out.contains("f,0.0500"));
    }

    #[test]
    fn test_special_characters_quoted() {
        let out = render(&[
            TimingRecord::new("a,b", "1.0"),
            TimingRecord::new(r#"say"hi""#, "2.0"),
        ]);
        assert!(out.contains(&format!("\"a,b\",1.0{}", nl())));
        assert!(out.contains(&format!("\"say\"\"hi\"\"\",2.0{}", nl())));
    }

    #[test]
    fn test_quoted_fields_round_trip() {
        let records = vec![
            TimingRecord::new("a,b", "1.0"),
            TimingRecord::new(r#"q"uote"#, "2.50"),
            TimingRecord::new("plain", "3.000"),
        ];
        let out = render(&records);

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER);

        let parsed: Vec<TimingRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_rows_end_in_crlf() {
        let out = render(&[TimingRecord::new("buildTree", "123.456000")]);
        assert_eq!(out.as_bytes(), b"Function Name,Time (microseconds)\r\nbuildTree,123.456000\r\n");
    }

    #[test]
    fn test_finish_keeps_flush_error() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let writer = TableWriter::new(BrokenPipe).unwrap();
        let err = writer.finish().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "reader went away");
    }

    #[test]
    fn test_row_count() {
        let mut writer = TableWriter::new(Vec::new()).unwrap();
        assert_eq!(writer.rows(), 0);
        writer.write(&TimingRecord::new("f", "1.0")).unwrap();
        writer.write(&TimingRecord::new("g", "2.0")).unwrap();
        assert_eq!(writer.rows(), 2);
    }
}
