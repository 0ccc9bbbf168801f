//! Immutable character sets with O(1) membership
//!
//! Layout mirrors a terminator table: ASCII members live in a flat lookup
//! array, everything else in a hash set that is usually empty.

use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

/// An unordered, duplicate-free collection of characters
#[derive(Clone, PartialEq, Eq)]
pub struct CharacterSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Members outside the ASCII range
    non_ascii: HashSet<char>,
    /// Number of distinct members
    len: usize,
}

impl CharacterSet {
    /// The empty set
    pub fn new() -> Self {
        Self {
            ascii_table: [false; 128],
            non_ascii: HashSet::new(),
            len: 0,
        }
    }

    /// Create from any sequence of characters; duplicates collapse
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut set = Self::new();
        for ch in chars {
            set.insert(ch);
        }
        set
    }

    /// Create from an inclusive character range
    pub fn from_range(range: RangeInclusive<char>) -> Self {
        Self::from_chars(range)
    }

    /// Members of either set
    pub fn union(&self, other: &CharacterSet) -> CharacterSet {
        let mut set = self.clone();
        for ch in other.iter() {
            set.insert(ch);
        }
        set
    }

    // Only used while building; the public surface is read-only.
    fn insert(&mut self, ch: char) {
        let added = if ch.is_ascii() {
            let slot = &mut self.ascii_table[ch as usize];
            !std::mem::replace(slot, true)
        } else {
            self.non_ascii.insert(ch)
        };
        if added {
            self.len += 1;
        }
    }

    /// Check membership - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Number of distinct members
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending code point order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        let mut non_ascii: Vec<char> = self.non_ascii.iter().copied().collect();
        non_ascii.sort_unstable();

        self.ascii_table
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(|(code, _)| code as u8 as char)
            .chain(non_ascii)
    }
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

impl From<&str> for CharacterSet {
    fn from(chars: &str) -> Self {
        Self::from_chars(chars.chars())
    }
}

impl From<RangeInclusive<char>> for CharacterSet {
    fn from(range: RangeInclusive<char>) -> Self {
        Self::from_range(range)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, ch) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{ch:?}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
