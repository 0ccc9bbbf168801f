//! strcheck CLI library
//!
//! This library provides the command-line interface for the strcheck
//! string predicates.

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod sources;

pub use error::{CliError, CliResult};
