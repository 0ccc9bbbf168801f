//! Character-set, interval and collection predicates over strings
//!
//! The crate answers small questions about strings precisely:
//! - does every character belong to a [`CharacterSet`] or fall inside an
//!   [`Interval`]?
//! - is the string present in a sequence, a set, or the keys or values of a
//!   dictionary, by whole or partial match?
//! - which [`TextEncoding`] does a name refer to?
//!
//! Every predicate returns [`Result<bool>`]. A `false` is an answer; an
//! [`Error::InvalidArgument`] means the call itself broke a contract (an
//! absent string, an empty dictionary key, an unknown encoding name).
//!
//! # Example
//!
//! ```rust
//! use strcheck_core::{is_limited_to_range, in_dictionary, Interval, MatchOptions};
//! use std::collections::HashMap;
//!
//! let digits: Interval<char> = "[0,9]".parse().unwrap();
//! assert!(is_limited_to_range("12348765", &digits).unwrap());
//!
//! // The empty string only fits an empty interval
//! assert!(!is_limited_to_range("", &digits).unwrap());
//! assert!(is_limited_to_range("", &"(1,1)".parse().unwrap()).unwrap());
//!
//! let shop = HashMap::from([("FlipFlop", "cheap sandles")]);
//! assert!(!in_dictionary("Flop", &shop, MatchOptions::new()).unwrap());
//! assert!(in_dictionary("Flop", &shop, MatchOptions::partial()).unwrap());
//! ```

pub mod charset;
pub mod classify;
pub mod encoding;
pub mod error;
pub mod ext;
pub mod interval;
pub mod matcher;
pub mod path;
pub mod sets;
pub mod subject;

pub use charset::CharacterSet;
pub use classify::{
    contains_any_char, contains_any_str, is_all_decimal_digits, is_all_hex_digits,
    is_limited_to_range, is_limited_to_set_of, HexPrefix,
};
pub use encoding::{to_encoding, TextEncoding};
pub use error::{Error, Result};
pub use ext::StringPredicates;
pub use interval::{Interval, IntervalValue};
pub use matcher::{
    in_dictionary, in_keys, in_values, is_in, is_in_by, is_in_set, is_not_in, is_not_in_by,
    is_not_in_set, not_in_dictionary, not_in_keys, not_in_values, Comparison, ExactSet,
    KeyedCollection, MatchMode, MatchOptions, StrComparer,
};
pub use path::{correct_os_path_separators, replace_path_separators};
pub use sets::SetRegistry;
pub use subject::Subject;
