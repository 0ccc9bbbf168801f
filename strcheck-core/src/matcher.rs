//! Membership of a string in sequences, sets and dictionaries
//!
//! Sequence lookups take a comparer; set and key lookups are exact hash or
//! tree lookups; value and dictionary lookups can additionally accept a
//! substring match. Every `not_*` predicate is the plain negation of its
//! positive counterpart, errors included.

use crate::error::{Error, Result};
use crate::subject::{require, Subject};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// Equality used when scanning a sequence
pub trait StrComparer {
    /// Whether `left` and `right` are considered equal
    fn equals(&self, left: &str, right: &str) -> bool;
}

/// Built-in comparison modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Comparison {
    /// Code point equality
    #[default]
    Ordinal,
    /// Code point equality after simple lower-case folding, locale-free
    OrdinalIgnoreCase,
}

impl StrComparer for Comparison {
    fn equals(&self, left: &str, right: &str) -> bool {
        match self {
            Comparison::Ordinal => left == right,
            Comparison::OrdinalIgnoreCase => {
                left.chars().count() == right.chars().count()
                    && left.chars().map(fold_case).eq(right.chars().map(fold_case))
            }
        }
    }
}

/// One-to-one lower-case mapping; characters whose lower case expands are kept
fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

impl<F> StrComparer for F
where
    F: Fn(&str, &str) -> bool,
{
    fn equals(&self, left: &str, right: &str) -> bool {
        self(left, right)
    }
}

/// Whole-string versus substring matching
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Only equality counts
    #[default]
    Whole,
    /// Equality or substring containment counts
    Partial,
}

impl MatchMode {
    #[inline]
    fn is_partial(self) -> bool {
        self == MatchMode::Partial
    }
}

/// Match policy for [`in_dictionary`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// How keys are matched
    pub key: MatchMode,
    /// How values are matched
    pub value: MatchMode,
}

impl MatchOptions {
    /// Whole keys and whole values
    pub fn new() -> Self {
        Self::default()
    }

    /// Also accept a key that contains the string
    pub fn partial_keys(mut self) -> Self {
        self.key = MatchMode::Partial;
        self
    }

    /// Also accept a value that contains the string
    pub fn partial_values(mut self) -> Self {
        self.value = MatchMode::Partial;
        self
    }

    /// Partial keys and partial values
    pub fn partial() -> Self {
        Self::new().partial_keys().partial_values()
    }
}

/// A set answering exact string membership
pub trait ExactSet {
    /// Whether `item` is an element
    fn contains_exact(&self, item: &str) -> bool;
}

impl<K, H> ExactSet for HashSet<K, H>
where
    K: Borrow<str> + Hash + Eq,
    H: BuildHasher,
{
    fn contains_exact(&self, item: &str) -> bool {
        self.contains(item)
    }
}

impl<K> ExactSet for BTreeSet<K>
where
    K: Borrow<str> + Ord,
{
    fn contains_exact(&self, item: &str) -> bool {
        self.contains(item)
    }
}

/// A read-only string-to-string mapping
pub trait KeyedCollection {
    /// Direct key lookup
    fn contains_key(&self, key: &str) -> bool;

    /// All key/value pairs, in no particular order
    fn entries(&self) -> impl Iterator<Item = (&str, &str)>;
}

impl<K, V, H> KeyedCollection for HashMap<K, V, H>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    H: BuildHasher,
{
    fn contains_key(&self, key: &str) -> bool {
        HashMap::contains_key(self, key)
    }

    fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .map(|(k, v)| (Borrow::<str>::borrow(k), AsRef::<str>::as_ref(v)))
    }
}

impl<K, V> KeyedCollection for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn contains_key(&self, key: &str) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .map(|(k, v)| (Borrow::<str>::borrow(k), AsRef::<str>::as_ref(v)))
    }
}

/// True when the string equals some item, ordinally
pub fn is_in<S, I>(s: &S, items: I) -> Result<bool>
where
    S: Subject + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    is_in_by(s, items, &Comparison::Ordinal)
}

/// True when the string equals some item under `comparer`
pub fn is_in_by<S, I, C>(s: &S, items: I, comparer: &C) -> Result<bool>
where
    S: Subject + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
    C: StrComparer + ?Sized,
{
    let s = require(s)?;
    Ok(items
        .into_iter()
        .any(|item| comparer.equals(s, item.as_ref())))
}

/// Negation of [`is_in`]
pub fn is_not_in<S, I>(s: &S, items: I) -> Result<bool>
where
    S: Subject + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    is_in(s, items).map(|found| !found)
}

/// Negation of [`is_in_by`]
pub fn is_not_in_by<S, I, C>(s: &S, items: I, comparer: &C) -> Result<bool>
where
    S: Subject + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
    C: StrComparer + ?Sized,
{
    is_in_by(s, items, comparer).map(|found| !found)
}

/// True when the string is an element of `set`
pub fn is_in_set<S, E>(s: &S, set: &E) -> Result<bool>
where
    S: Subject + ?Sized,
    E: ExactSet + ?Sized,
{
    let s = require(s)?;
    Ok(set.contains_exact(s))
}

/// Negation of [`is_in_set`]
pub fn is_not_in_set<S, E>(s: &S, set: &E) -> Result<bool>
where
    S: Subject + ?Sized,
    E: ExactSet + ?Sized,
{
    is_in_set(s, set).map(|found| !found)
}

/// True when the string is a key of `dict`
///
/// Unlike every other lookup, the empty string is rejected with
/// `InvalidArgument`.
pub fn in_keys<S, D>(s: &S, dict: &D) -> Result<bool>
where
    S: Subject + ?Sized,
    D: KeyedCollection + ?Sized,
{
    let s = require(s)?;
    if s.is_empty() {
        return Err(Error::invalid_argument("str", "key must not be empty"));
    }
    Ok(dict.contains_key(s))
}

/// Negation of [`in_keys`]
pub fn not_in_keys<S, D>(s: &S, dict: &D) -> Result<bool>
where
    S: Subject + ?Sized,
    D: KeyedCollection + ?Sized,
{
    in_keys(s, dict).map(|found| !found)
}

/// True when some value of `dict` matches the string
pub fn in_values<S, D>(s: &S, dict: &D, mode: MatchMode) -> Result<bool>
where
    S: Subject + ?Sized,
    D: KeyedCollection + ?Sized,
{
    let s = require(s)?;
    Ok(dict
        .entries()
        .any(|(_, value)| value == s || (mode.is_partial() && value.contains(s))))
}

/// Negation of [`in_values`]
pub fn not_in_values<S, D>(s: &S, dict: &D, mode: MatchMode) -> Result<bool>
where
    S: Subject + ?Sized,
    D: KeyedCollection + ?Sized,
{
    in_values(s, dict, mode).map(|found| !found)
}

/// True when the string matches a key or a value of `dict`
///
/// An exact key is tried first by direct lookup. The scan that follows
/// always accepts an exactly equal value, whatever `options.value` says;
/// the options only gate the substring checks.
pub fn in_dictionary<S, D>(s: &S, dict: &D, options: MatchOptions) -> Result<bool>
where
    S: Subject + ?Sized,
    D: KeyedCollection + ?Sized,
{
    let s = require(s)?;

    if dict.contains_key(s) {
        return Ok(true);
    }

    Ok(dict.entries().any(|(key, value)| {
        (options.key.is_partial() && key.contains(s))
            || value == s
            || (options.value.is_partial() && value.contains(s))
    }))
}

/// Negation of [`in_dictionary`]
pub fn not_in_dictionary<S, D>(s: &S, dict: &D, options: MatchOptions) -> Result<bool>
where
    S: Subject + ?Sized,
    D: KeyedCollection + ?Sized,
{
    in_dictionary(s, dict, options).map(|found| !found)
}
