//! Text output formatter

use super::{Answer, OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one answer per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        match &report.answer {
            Answer::Bool(value) => writeln!(self.writer, "{value}")?,
            Answer::Text(value) => writeln!(self.writer, "{value}")?,
            Answer::List(items) => {
                for item in items {
                    writeln!(self.writer, "{item}")?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
