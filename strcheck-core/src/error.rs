//! Error types

use thiserror::Error;

/// Errors raised by predicates, parsers and the set registry
#[derive(Error, Debug)]
pub enum Error {
    /// An argument violated the operation's contract
    ///
    /// This is never a substitute for a `false` result: a predicate either
    /// answers or fails with this variant.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        argument: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// Set registry document could not be parsed or validated
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading a registry document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::InvalidArgument`]
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Whether this is a contract violation rather than an environment failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

/// Result type for strcheck operations
pub type Result<T> = std::result::Result<T, Error>;
