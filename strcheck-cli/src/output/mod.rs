//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain `true`/`false` or one value per line
    Text,
    /// A JSON object with the command, input and answer
    Json,
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// A predicate result
    Bool(bool),
    /// A single resolved or rewritten value
    Text(String),
    /// A listing
    List(Vec<String>),
}

/// A command result ready for formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Subcommand name
    pub command: &'static str,
    /// The string the command examined, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// The answer
    pub answer: Answer,
}

impl Report {
    /// A report for a predicate over `input`
    pub fn verdict(command: &'static str, input: &str, answer: bool) -> Self {
        Self {
            command,
            input: Some(input.to_string()),
            answer: Answer::Bool(answer),
        }
    }

    /// A report carrying a single value derived from `input`
    pub fn value(command: &'static str, input: &str, value: String) -> Self {
        Self {
            command,
            input: Some(input.to_string()),
            answer: Answer::Text(value),
        }
    }

    /// A report listing names
    pub fn listing(command: &'static str, items: Vec<String>) -> Self {
        Self {
            command,
            input: None,
            answer: Answer::List(items),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single report
    fn write_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (e.g., flush buffered JSON)
    fn finish(&mut self) -> Result<()>;
}

/// Build the formatter for `format` over `writer`
pub fn formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
