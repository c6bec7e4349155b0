//! Line-based extraction of benchmark timings
//!
//! A line is interesting when it contains, anywhere, the fragment
//!
//! ```text
//! -- pentagonChildren_<name>: <digits>.<digits> microseconds
//! ```
//!
//! `<name>` is any run of non-whitespace characters and is captured verbatim,
//! commas and quotes included; escaping is the writer's job. Only the
//! leftmost occurrence on a line is captured. Lines without the fragment are
//! skipped silently.
//!
//! This module does no I/O: it works on any iterator of lines.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::TimingRecord;

/// Pattern matched against every input line
pub const TIMING_PATTERN: &str = r"-- pentagonChildren_(\S+): (\d+\.\d+) microseconds";

static TIMING_REGEX: OnceLock<Regex> = OnceLock::new();

fn timing_regex() -> &'static Regex {
    TIMING_REGEX.get_or_init(|| Regex::new(TIMING_PATTERN).expect("TIMING_PATTERN is a valid regex"))
}

/// Extract the timing record from a single line, if the line holds one
///
/// # Example
/// ```
/// use pentagon_timings::extractor::parse_line;
///
/// let record = parse_line("INFO -- pentagonChildren_buildTree: 123.456000 microseconds").unwrap();
/// assert_eq!(record.name, "buildTree");
/// assert_eq!(record.value, "123.456000");
/// ```
pub fn parse_line(line: &str) -> Option<TimingRecord> {
    let caps = timing_regex().captures(line)?;
    Some(TimingRecord::new(&caps[1], &caps[2]))
}

/// Lazily extract timing records from a sequence of lines
///
/// The returned iterator makes a single forward pass over `lines` and
/// yields records in input order.
pub fn extract<I>(lines: I) -> Records<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Records {
        lines: lines.into_iter(),
    }
}

/// Iterator returned by [`extract`]
#[derive(Debug)]
pub struct Records<I> {
    lines: I,
}

impl<I> Iterator for Records<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = TimingRecord;

    fn next(&mut self) -> Option<TimingRecord> {
        self.lines.find_map(|line| parse_line(line.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every line may or may not match
        (0, self.lines.size_hint().1)
    }
}
