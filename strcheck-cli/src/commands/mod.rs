//! CLI command implementations

use crate::output::Report;
use anyhow::Result;
use clap::Subcommand;

pub mod classify;
pub mod encoding;
pub mod list;
pub mod lookup;
pub mod member;
pub mod path;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that every character is an ASCII decimal digit
    Digits(classify::DigitsArgs),

    /// Check for hexadecimal digits with an optional 0x prefix
    Hex(classify::HexArgs),

    /// Check that every character belongs to a character set
    Set(classify::SetArgs),

    /// Check that every character falls inside an interval
    Range(classify::RangeArgs),

    /// Check whether any of the needles occurs in the text
    Contains(classify::ContainsArgs),

    /// Check whether the text is one of the listed items
    Member(member::MemberArgs),

    /// Check the text against the keys or values of a JSON dictionary
    Lookup(lookup::LookupArgs),

    /// Resolve an encoding name, optionally decoding a file with it
    Encoding(encoding::EncodingArgs),

    /// Rewrite path separators for this platform
    Path(path::PathArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the command and return its report
    pub fn execute(&self) -> Result<Report> {
        match self {
            Commands::Digits(args) => args.execute(),
            Commands::Hex(args) => args.execute(),
            Commands::Set(args) => args.execute(),
            Commands::Range(args) => args.execute(),
            Commands::Contains(args) => args.execute(),
            Commands::Member(args) => args.execute(),
            Commands::Lookup(args) => args.execute(),
            Commands::Encoding(args) => args.execute(),
            Commands::Path(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Answer;

    #[test]
    fn test_commands_debug_format() {
        let digits = Commands::Digits(classify::DigitsArgs {
            text: "12348765".to_string(),
        });
        let debug_str = format!("{:?}", digits);
        assert!(debug_str.contains("Digits"));
        assert!(debug_str.contains("12348765"));

        let list = Commands::List {
            subcommand: ListCommands::Sets { sets: None },
        };
        let debug_str = format!("{:?}", list);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Sets"));
    }

    #[test]
    fn test_execute_dispatches() {
        let report = Commands::Hex(classify::HexArgs {
            text: "0xA1".to_string(),
            require_prefix: true,
        })
        .execute()
        .unwrap();

        assert_eq!(report.command, "hex");
        assert_eq!(report.answer, Answer::Bool(true));
    }
}
