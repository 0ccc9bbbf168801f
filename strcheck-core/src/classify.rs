//! Character classification predicates
//!
//! Every predicate here answers "do all characters of the string belong to
//! this class". The empty string is handled explicitly: it only qualifies
//! when the class itself is empty, never by vacuous truth.

use crate::charset::CharacterSet;
use crate::error::Result;
use crate::interval::Interval;
use crate::sets;
use crate::subject::{require, Subject};

/// Whether a hexadecimal string must carry a `0x` prefix
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexPrefix {
    /// Accept the string with or without `0x`/`0X`
    #[default]
    Optional,
    /// Reject the string unless it starts with `0x`/`0X`
    Required,
}

/// True when any of `needles` occurs in the string
pub fn contains_any_char<S: Subject + ?Sized>(s: &S, needles: &[char]) -> Result<bool> {
    let s = require(s)?;
    Ok(needles.iter().any(|&ch| s.contains(ch)))
}

/// True when any of `needles` is a substring of the string
///
/// An empty needle is a substring of every string.
pub fn contains_any_str<S, N>(s: &S, needles: &[N]) -> Result<bool>
where
    S: Subject + ?Sized,
    N: AsRef<str>,
{
    let s = require(s)?;
    Ok(needles.iter().any(|needle| s.contains(needle.as_ref())))
}

/// True when every character is an ASCII decimal digit
pub fn is_all_decimal_digits<S: Subject + ?Sized>(s: &S) -> Result<bool> {
    is_limited_to_set_of(s, sets::decimal_digits())
}

/// True when every character is a hex digit, case-insensitively
///
/// A `0x`/`0X` prefix is stripped before checking. A bare prefix leaves
/// nothing to check and is rejected like the empty string.
pub fn is_all_hex_digits<S: Subject + ?Sized>(s: &S, prefix: HexPrefix) -> Result<bool> {
    let s = require(s)?;
    let hex = sets::hex_digits();

    match strip_hex_prefix(s) {
        Some(digits) => is_limited_to_set_of(digits, hex),
        None if prefix == HexPrefix::Required => Ok(false),
        None => is_limited_to_set_of(s, hex),
    }
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    let head = s.get(..2)?;
    if head.eq_ignore_ascii_case("0x") {
        s.get(2..)
    } else {
        None
    }
}

/// True when every character is a member of `set`
///
/// `""` is limited to `set` only when `set` is empty.
pub fn is_limited_to_set_of<S: Subject + ?Sized>(s: &S, set: &CharacterSet) -> Result<bool> {
    let s = require(s)?;

    if s.is_empty() {
        return Ok(set.is_empty());
    }

    Ok(s.chars().all(|ch| set.contains(ch)))
}

/// True when every character falls within `interval`
///
/// `""` is limited to `interval` only when `interval` is empty.
pub fn is_limited_to_range<S: Subject + ?Sized>(s: &S, interval: &Interval<char>) -> Result<bool> {
    let s = require(s)?;

    if s.is_empty() {
        return Ok(interval.is_empty());
    }

    Ok(s.chars().all(|ch| interval.contains(ch)))
}
