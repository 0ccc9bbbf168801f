//! Dictionary lookup command

use crate::output::Report;
use crate::sources;
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use strcheck_core::{MatchOptions, StringPredicates};

/// Which part of the dictionary to search
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LookupTarget {
    /// Keys and values, honoring both partial flags
    Dictionary,
    /// Keys only, always whole-string
    Keys,
    /// Values only, honoring --partial-values
    Values,
}

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Text to look up
    pub text: String,

    /// Flat JSON object of string keys to string values
    #[arg(short, long, value_name = "FILE")]
    pub dict: PathBuf,

    /// What to search
    #[arg(short, long, value_enum, default_value = "dictionary")]
    pub target: LookupTarget,

    /// Match keys that contain the text
    #[arg(long)]
    pub partial_keys: bool,

    /// Match values that contain the text
    #[arg(long)]
    pub partial_values: bool,

    /// Report whether the text is absent instead
    #[arg(long)]
    pub negate: bool,
}

impl LookupArgs {
    fn options(&self) -> MatchOptions {
        let mut options = MatchOptions::new();
        if self.partial_keys {
            options = options.partial_keys();
        }
        if self.partial_values {
            options = options.partial_values();
        }
        options
    }

    /// Execute the lookup command
    pub fn execute(&self) -> Result<Report> {
        let dictionary = sources::load_dictionary(&self.dict)?;
        let options = self.options();
        log::debug!("Looking up {:?} in {:?} with {:?}", self.text, self.target, options);

        let text = self.text.as_str();
        let answer = match (self.target, self.negate) {
            (LookupTarget::Dictionary, false) => text.in_dictionary(&dictionary, options)?,
            (LookupTarget::Dictionary, true) => text.not_in_dictionary(&dictionary, options)?,
            (LookupTarget::Keys, false) => text.in_keys(&dictionary)?,
            (LookupTarget::Keys, true) => text.not_in_keys(&dictionary)?,
            (LookupTarget::Values, false) => text.in_values(&dictionary, options.value)?,
            (LookupTarget::Values, true) => text.not_in_values(&dictionary, options.value)?,
        };
        Ok(Report::verdict("lookup", text, answer))
    }
}
