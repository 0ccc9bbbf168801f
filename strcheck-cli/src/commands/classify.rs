//! Character-level classification commands

use crate::output::Report;
use crate::sources;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use strcheck_core::{CharacterSet, HexPrefix, Interval, StringPredicates};

/// Arguments for the digits command
#[derive(Debug, Args)]
pub struct DigitsArgs {
    /// Text to check
    pub text: String,
}

impl DigitsArgs {
    /// Execute the digits command
    pub fn execute(&self) -> Result<Report> {
        let answer = self.text.is_all_decimal_digits()?;
        Ok(Report::verdict("digits", &self.text, answer))
    }
}

/// Arguments for the hex command
#[derive(Debug, Args)]
pub struct HexArgs {
    /// Text to check
    pub text: String,

    /// Require a leading 0x or 0X
    #[arg(long)]
    pub require_prefix: bool,
}

impl HexArgs {
    /// Execute the hex command
    pub fn execute(&self) -> Result<Report> {
        let prefix = if self.require_prefix {
            HexPrefix::Required
        } else {
            HexPrefix::Optional
        };
        let answer = self.text.is_all_hex_digits(prefix)?;
        Ok(Report::verdict("hex", &self.text, answer))
    }
}

/// Arguments for the set command
#[derive(Debug, Args)]
pub struct SetArgs {
    /// Text to check
    pub text: String,

    /// Named character set
    #[arg(
        short,
        long,
        value_name = "SET",
        conflicts_with = "chars",
        required_unless_present = "chars"
    )]
    pub name: Option<String>,

    /// Explicit characters making up the set
    #[arg(short, long, value_name = "CHARS")]
    pub chars: Option<String>,

    /// TOML document with additional named sets
    #[arg(long, value_name = "FILE", requires = "name")]
    pub sets: Option<PathBuf>,
}

impl SetArgs {
    fn resolve_set(&self) -> Result<CharacterSet> {
        match (&self.name, &self.chars) {
            (_, Some(chars)) => Ok(CharacterSet::from(chars.as_str())),
            (Some(name), None) => {
                let registry = sources::load_registry(self.sets.as_deref())?;
                Ok(registry.require(name)?.clone())
            }
            (None, None) => anyhow::bail!("either --name or --chars is required"),
        }
    }

    /// Execute the set command
    pub fn execute(&self) -> Result<Report> {
        let set = self.resolve_set()?;
        log::debug!("Checking against {} characters", set.len());

        let answer = self.text.is_limited_to_set_of(&set)?;
        Ok(Report::verdict("set", &self.text, answer))
    }
}

/// Arguments for the range command
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Text to check
    pub text: String,

    /// Interval such as [0,9] or (a,z]
    #[arg(allow_hyphen_values = true)]
    pub interval: String,
}

impl RangeArgs {
    /// Execute the range command
    pub fn execute(&self) -> Result<Report> {
        let interval: Interval<char> = self
            .interval
            .parse()
            .with_context(|| format!("Invalid interval {:?}", self.interval))?;

        let answer = self.text.is_limited_to_range(&interval)?;
        Ok(Report::verdict("range", &self.text, answer))
    }
}

/// Arguments for the contains command
#[derive(Debug, Args)]
pub struct ContainsArgs {
    /// Text to search
    pub text: String,

    /// Substrings to look for
    #[arg(required = true)]
    pub needles: Vec<String>,

    /// Treat every needle as a list of single characters
    #[arg(long)]
    pub chars: bool,
}

impl ContainsArgs {
    /// Execute the contains command
    pub fn execute(&self) -> Result<Report> {
        let answer = if self.chars {
            let chars: Vec<char> = self.needles.iter().flat_map(|n| n.chars()).collect();
            self.text.contains_any_char(&chars)?
        } else {
            self.text.contains_any_str(&self.needles)?
        };
        Ok(Report::verdict("contains", &self.text, answer))
    }
}
