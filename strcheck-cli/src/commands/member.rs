//! Sequence membership command

use crate::output::Report;
use anyhow::Result;
use clap::Args;
use strcheck_core::{Comparison, StringPredicates};

/// Arguments for the member command
#[derive(Debug, Args)]
pub struct MemberArgs {
    /// Text to look for
    pub text: String,

    /// Items to compare against
    #[arg(required = true)]
    pub items: Vec<String>,

    /// Compare ignoring case
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Report whether the text is absent instead
    #[arg(long)]
    pub negate: bool,
}

impl MemberArgs {
    /// Execute the member command
    pub fn execute(&self) -> Result<Report> {
        let comparison = if self.ignore_case {
            Comparison::OrdinalIgnoreCase
        } else {
            Comparison::Ordinal
        };

        let answer = if self.negate {
            self.text.is_not_in_by(&self.items, &comparison)?
        } else {
            self.text.is_in_by(&self.items, &comparison)?
        };
        Ok(Report::verdict("member", &self.text, answer))
    }
}
