//! Listing commands

use crate::output::Report;
use crate::sources;
use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;
use strcheck_core::TextEncoding;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List named character sets
    Sets {
        /// TOML document with additional named sets
        #[arg(long, value_name = "FILE")]
        sets: Option<PathBuf>,
    },

    /// List recognized encoding names
    Encodings,
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> Result<Report> {
        let items = match self {
            ListCommands::Sets { sets } => {
                let registry = sources::load_registry(sets.as_deref())?;
                registry.names().map(str::to_string).collect()
            }
            ListCommands::Encodings => TextEncoding::ALL
                .iter()
                .map(|encoding| encoding.name().to_string())
                .collect(),
        };
        Ok(Report::listing("list", items))
    }
}
