//! Grouping lines into records.
//!
//! The parser holds one current record. A boundary line completes it (when
//! non-empty) and is then itself recorded as a degenerate `line -> ""` entry
//! of the next record, unless [`ParserOptions::keep_boundary_entries`] is
//! off. At end of input a record that has not seen a boundary is dropped
//! unless [`ParserOptions::flush_trailing`] is on.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::error::Result;
use crate::record::{fields, Line, Record};
use crate::template::Template;

/// Knobs for the two boundary edge cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Emit a record still open at end of input.
    pub flush_trailing: bool,
    /// Record each boundary line as a `line -> ""` entry of the next record.
    pub keep_boundary_entries: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            flush_trailing: false,
            keep_boundary_entries: true,
        }
    }
}

/// Counters from one pass over an input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Records handed to the consumer.
    pub records: usize,
    /// Lines read from the input.
    pub lines: usize,
    /// Whether a record with assignments was left open at end of input.
    pub trailing_dropped: bool,
}

/// Line-at-a-time record grouper.
#[derive(Debug, Default)]
pub struct RecordParser {
    options: ParserOptions,
    current: Record,
    /// Assignments seen since the last boundary.
    pending: usize,
    lines: usize,
}

impl RecordParser {
    /// Create a parser with the given options.
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// The options this parser was created with.
    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// The record being accumulated.
    pub fn current(&self) -> &Record {
        &self.current
    }

    /// Lines fed so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Feed one line. Returns the completed record if the line is a boundary
    /// and the current record was non-empty.
    pub fn feed(&mut self, raw: &str) -> Option<Record> {
        self.lines += 1;
        let line = Line::classify(raw);

        let mut completed = None;
        if line.is_boundary() {
            if !self.current.is_empty() {
                completed = Some(self.current.take());
                self.pending = 0;
            }
            if !self.options.keep_boundary_entries {
                return completed;
            }
        } else {
            self.pending += 1;
        }

        let (field, value) = line.entry();
        self.current.insert(field, value);
        completed
    }

    /// End the input. Returns the open record if `flush_trailing` is set and
    /// it holds at least one assignment.
    pub fn finish(mut self) -> Finished {
        let open = self.pending > 0;
        let record = if open && self.options.flush_trailing {
            Some(self.current.take())
        } else {
            None
        };
        Finished {
            record,
            trailing_dropped: open && !self.options.flush_trailing,
            lines: self.lines,
        }
    }
}

/// Outcome of [`RecordParser::finish`].
#[derive(Debug)]
pub struct Finished {
    /// The flushed trailing record, if any.
    pub record: Option<Record>,
    /// A record with assignments was discarded.
    pub trailing_dropped: bool,
    /// Total lines fed.
    pub lines: usize,
}

/// Drive a parser over `reader`, passing each completed record to `sink`.
///
/// Stops at the first error from the reader or the sink.
pub fn for_each_record<R, F>(
    reader: R,
    options: ParserOptions,
    mut sink: F,
) -> Result<ParseSummary>
where
    R: BufRead,
    F: FnMut(Record) -> Result<()>,
{
    let mut parser = RecordParser::new(options);
    let mut records = 0;

    for line in reader.lines() {
        let line = line?;
        if let Some(record) = parser.feed(&line) {
            sink(record)?;
            records += 1;
        }
    }

    let finished = parser.finish();
    if let Some(record) = finished.record {
        debug!("flushing trailing record at end of input");
        sink(record)?;
        records += 1;
    }
    if finished.trailing_dropped {
        warn!(
            lines = finished.lines,
            "input ended without a boundary line; last record was not emitted"
        );
    }

    Ok(ParseSummary {
        records,
        lines: finished.lines,
        trailing_dropped: finished.trailing_dropped,
    })
}

/// Collect every record in `reader`.
pub fn parse_records<R: BufRead>(reader: R, options: ParserOptions) -> Result<Vec<Record>> {
    let mut out = Vec::new();
    for_each_record(reader, options, |record| {
        out.push(record);
        Ok(())
    })?;
    Ok(out)
}

/// Render every record in `reader` with `template` and write the blocks to
/// `writer`, separated by blank lines.
pub fn emit_declarations<R, W>(
    reader: R,
    writer: &mut W,
    template: Template,
    scheme: &str,
    algorithm: &str,
    options: ParserOptions,
) -> Result<ParseSummary>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut first = true;
    for_each_record(reader, options, |record| {
        let block = template.render(scheme, algorithm, &record)?;
        if !first {
            writer.write_all(b"\n")?;
        }
        writer.write_all(block.as_bytes())?;
        first = false;
        debug!(
            count = record.get(fields::COUNT).unwrap_or_default(),
            "emitted test declaration"
        );
        Ok(())
    })
}
