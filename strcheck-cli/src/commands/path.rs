//! Path separator command

use crate::output::Report;
use anyhow::Result;
use clap::Args;
use strcheck_core::{replace_path_separators, StringPredicates};

/// Arguments for the path command
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Path to rewrite
    pub path: String,

    /// Separator to use instead of this platform's
    #[arg(short, long, value_name = "CHAR")]
    pub separator: Option<char>,
}

impl PathArgs {
    /// Execute the path command
    pub fn execute(&self) -> Result<Report> {
        let corrected = match self.separator {
            Some(separator) => replace_path_separators(&self.path, separator)?,
            None => self.path.correct_os_path_separators()?,
        };
        Ok(Report::value("path", &self.path, corrected))
    }
}
