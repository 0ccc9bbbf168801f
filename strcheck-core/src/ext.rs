//! Method-call syntax for every predicate
//!
//! ```rust
//! use strcheck_core::{HexPrefix, StringPredicates};
//!
//! assert!("0xA1".is_all_hex_digits(HexPrefix::Required).unwrap());
//! assert!("two".is_in(["one", "two"]).unwrap());
//! ```

use crate::charset::CharacterSet;
use crate::classify::{self, HexPrefix};
use crate::encoding::{self, TextEncoding};
use crate::error::Result;
use crate::interval::Interval;
use crate::matcher::{self, ExactSet, KeyedCollection, MatchMode, MatchOptions, StrComparer};
use crate::path;
use crate::subject::Subject;

/// String predicates as methods on anything that is a [`Subject`]
pub trait StringPredicates: Subject {
    /// See [`classify::contains_any_char`]
    fn contains_any_char(&self, needles: &[char]) -> Result<bool> {
        classify::contains_any_char(self, needles)
    }

    /// See [`classify::contains_any_str`]
    fn contains_any_str<N: AsRef<str>>(&self, needles: &[N]) -> Result<bool> {
        classify::contains_any_str(self, needles)
    }

    /// See [`classify::is_all_decimal_digits`]
    fn is_all_decimal_digits(&self) -> Result<bool> {
        classify::is_all_decimal_digits(self)
    }

    /// See [`classify::is_all_hex_digits`]
    fn is_all_hex_digits(&self, prefix: HexPrefix) -> Result<bool> {
        classify::is_all_hex_digits(self, prefix)
    }

    /// See [`classify::is_limited_to_set_of`]
    fn is_limited_to_set_of(&self, set: &CharacterSet) -> Result<bool> {
        classify::is_limited_to_set_of(self, set)
    }

    /// See [`classify::is_limited_to_range`]
    fn is_limited_to_range(&self, interval: &Interval<char>) -> Result<bool> {
        classify::is_limited_to_range(self, interval)
    }

    /// See [`matcher::is_in`]
    fn is_in<I>(&self, items: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        matcher::is_in(self, items)
    }

    /// See [`matcher::is_in_by`]
    fn is_in_by<I, C>(&self, items: I, comparer: &C) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        C: StrComparer + ?Sized,
    {
        matcher::is_in_by(self, items, comparer)
    }

    /// See [`matcher::is_not_in`]
    fn is_not_in<I>(&self, items: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        matcher::is_not_in(self, items)
    }

    /// See [`matcher::is_not_in_by`]
    fn is_not_in_by<I, C>(&self, items: I, comparer: &C) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        C: StrComparer + ?Sized,
    {
        matcher::is_not_in_by(self, items, comparer)
    }

    /// See [`matcher::is_in_set`]
    fn is_in_set<E: ExactSet + ?Sized>(&self, set: &E) -> Result<bool> {
        matcher::is_in_set(self, set)
    }

    /// See [`matcher::is_not_in_set`]
    fn is_not_in_set<E: ExactSet + ?Sized>(&self, set: &E) -> Result<bool> {
        matcher::is_not_in_set(self, set)
    }

    /// See [`matcher::in_keys`]
    fn in_keys<D: KeyedCollection + ?Sized>(&self, dict: &D) -> Result<bool> {
        matcher::in_keys(self, dict)
    }

    /// See [`matcher::not_in_keys`]
    fn not_in_keys<D: KeyedCollection + ?Sized>(&self, dict: &D) -> Result<bool> {
        matcher::not_in_keys(self, dict)
    }

    /// See [`matcher::in_values`]
    fn in_values<D: KeyedCollection + ?Sized>(&self, dict: &D, mode: MatchMode) -> Result<bool> {
        matcher::in_values(self, dict, mode)
    }

    /// See [`matcher::not_in_values`]
    fn not_in_values<D: KeyedCollection + ?Sized>(
        &self,
        dict: &D,
        mode: MatchMode,
    ) -> Result<bool> {
        matcher::not_in_values(self, dict, mode)
    }

    /// See [`matcher::in_dictionary`]
    fn in_dictionary<D: KeyedCollection + ?Sized>(
        &self,
        dict: &D,
        options: MatchOptions,
    ) -> Result<bool> {
        matcher::in_dictionary(self, dict, options)
    }

    /// See [`matcher::not_in_dictionary`]
    fn not_in_dictionary<D: KeyedCollection + ?Sized>(
        &self,
        dict: &D,
        options: MatchOptions,
    ) -> Result<bool> {
        matcher::not_in_dictionary(self, dict, options)
    }

    /// See [`encoding::to_encoding`]
    fn to_encoding(&self) -> Result<TextEncoding> {
        encoding::to_encoding(self)
    }

    /// See [`path::correct_os_path_separators`]
    fn correct_os_path_separators(&self) -> Result<String> {
        path::correct_os_path_separators(self)
    }
}

impl<T: Subject + ?Sized> StringPredicates for T {}
