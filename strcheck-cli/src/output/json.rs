//! JSON output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - buffers the report and writes it on `finish`
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<Report>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // A single report is written bare, several as an array.
        match self.reports.as_slice() {
            [single] => serde_json::to_writer_pretty(&mut self.writer, single)?,
            reports => serde_json::to_writer_pretty(&mut self.writer, reports)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
