//! Ordered intervals with independently open or closed bounds
//!
//! Intervals are written in the usual mathematical notation: `[0,9]` is
//! closed on both ends, `(a, z)` is open on both ends, and `[0,10)` mixes
//! the two. Bound values are discrete, so emptiness is decided by whether
//! any representable value fits between the bounds.

use crate::error::{Error, Result};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A discrete, ordered value usable as an interval bound
pub trait IntervalValue: Copy + Ord + fmt::Debug {
    /// The next representable value, or `None` at the maximum
    fn successor(self) -> Option<Self>;

    /// Parse one bound from interval notation
    fn parse_bound(text: &str) -> Option<Self>;

    /// Write the bound so that [`IntervalValue::parse_bound`] reads it back
    fn fmt_bound(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl IntervalValue for char {
    fn successor(self) -> Option<Self> {
        match self {
            '\u{D7FF}' => Some('\u{E000}'),
            char::MAX => None,
            ch => char::from_u32(ch as u32 + 1),
        }
    }

    fn parse_bound(text: &str) -> Option<Self> {
        // A lone character is taken as written, so `[ ,~]` keeps its space.
        if let Some(ch) = single_char(text) {
            return Some(ch);
        }

        let trimmed = text.trim();
        if let Some(ch) = single_char(trimmed) {
            return Some(ch);
        }

        trimmed
            .strip_prefix("U+")
            .or_else(|| trimmed.strip_prefix("u+"))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32)
    }

    fn fmt_bound(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ambiguous = matches!(self, ',' | '[' | ']' | '(' | ')');
        if ambiguous || self.is_whitespace() || self.is_control() {
            write!(f, "U+{:04X}", self as u32)
        } else {
            write!(f, "{self}")
        }
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

macro_rules! integer_interval_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntervalValue for $ty {
                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn parse_bound(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }

                fn fmt_bound(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{self}")
                }
            }
        )*
    };
}

integer_interval_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// An interval over discrete values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: T,
    upper: T,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

impl<T: IntervalValue> Interval<T> {
    /// Create an interval; fails when `lower > upper`
    pub fn new(lower: T, upper: T, lower_inclusive: bool, upper_inclusive: bool) -> Result<Self> {
        if lower > upper {
            return Err(Error::invalid_argument(
                "interval",
                format!("lower bound {lower:?} exceeds upper bound {upper:?}"),
            ));
        }

        Ok(Self {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
        })
    }

    /// `[lower, upper]`
    pub fn closed(lower: T, upper: T) -> Result<Self> {
        Self::new(lower, upper, true, true)
    }

    /// `(lower, upper)`
    pub fn open(lower: T, upper: T) -> Result<Self> {
        Self::new(lower, upper, false, false)
    }

    /// `[lower, upper)`
    pub fn closed_open(lower: T, upper: T) -> Result<Self> {
        Self::new(lower, upper, true, false)
    }

    /// `(lower, upper]`
    pub fn open_closed(lower: T, upper: T) -> Result<Self> {
        Self::new(lower, upper, false, true)
    }

    /// `[value, value]`, containing exactly one value
    pub fn point(value: T) -> Self {
        Self {
            lower: value,
            upper: value,
            lower_inclusive: true,
            upper_inclusive: true,
        }
    }

    /// `(value, value)`, containing nothing
    pub fn empty_at(value: T) -> Self {
        Self {
            lower: value,
            upper: value,
            lower_inclusive: false,
            upper_inclusive: false,
        }
    }

    /// Parse interval notation such as `[0,9]` or `(a, z)`
    pub fn parse(notation: &str) -> Result<Self> {
        let invalid =
            |reason: &str| Error::invalid_argument("notation", format!("{reason}: {notation:?}"));

        let trimmed = notation.trim();
        let lower_inclusive = match trimmed.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => return Err(invalid("expected `[` or `(`")),
        };
        let upper_inclusive = match trimmed.chars().next_back() {
            Some(']') => true,
            Some(')') => false,
            _ => return Err(invalid("expected `]` or `)`")),
        };

        // Both delimiters are ASCII, so byte slicing stays on char boundaries.
        let inner = trimmed
            .get(1..trimmed.len() - 1)
            .ok_or_else(|| invalid("missing bounds"))?;
        let (lower_text, upper_text) = inner
            .split_once(',')
            .ok_or_else(|| invalid("expected two comma-separated bounds"))?;

        let lower = T::parse_bound(lower_text).ok_or_else(|| invalid("unreadable lower bound"))?;
        let upper = T::parse_bound(upper_text).ok_or_else(|| invalid("unreadable upper bound"))?;

        Self::new(lower, upper, lower_inclusive, upper_inclusive)
    }

    /// Lower bound value
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Upper bound value
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Whether the lower bound belongs to the interval
    pub fn lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    /// Whether the upper bound belongs to the interval
    pub fn upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    /// Whether no representable value lies within the bounds
    pub fn is_empty(&self) -> bool {
        match (self.lower_inclusive, self.upper_inclusive) {
            (true, true) => false,
            (true, false) | (false, true) => self.lower == self.upper,
            (false, false) => match self.lower.successor() {
                Some(next) => next >= self.upper,
                None => true,
            },
        }
    }

    /// Check membership against both bounds
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        let above = if self.lower_inclusive {
            value >= self.lower
        } else {
            value > self.lower
        };
        let below = if self.upper_inclusive {
            value <= self.upper
        } else {
            value < self.upper
        };
        above && below
    }

    /// Every value in the interval, ascending
    pub fn values(&self) -> impl Iterator<Item = T> {
        let interval = *self;
        let first = if interval.lower_inclusive {
            Some(interval.lower)
        } else {
            interval.lower.successor()
        };

        std::iter::successors(first, |value| value.successor())
            .take_while(move |value| interval.contains(*value))
    }
}

impl<T: IntervalValue> FromStr for Interval<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<T: IntervalValue> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.lower_inclusive { "[" } else { "(" })?;
        self.lower.fmt_bound(f)?;
        f.write_str(",")?;
        self.upper.fmt_bound(f)?;
        f.write_str(if self.upper_inclusive { "]" } else { ")" })
    }
}

impl<T: IntervalValue> Serialize for Interval<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: IntervalValue> Deserialize<'de> for Interval<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let notation = String::deserialize(deserializer)?;
        Self::parse(&notation).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(notation: &str) -> Interval<char> {
        notation.parse().unwrap()
    }

    #[test]
    fn test_parse_closed() {
        let interval = chars("[0,9]");
        assert_eq!(interval.lower(), '0');
        assert_eq!(interval.upper(), '9');
        assert!(interval.lower_inclusive());
        assert!(interval.upper_inclusive());
        assert!(interval.contains('0'));
        assert!(interval.contains('9'));
        assert!(!interval.contains('a'));
    }

    #[test]
    fn test_parse_open_with_whitespace() {
        let interval = chars(" (a, z) ");
        assert!(!interval.contains('a'));
        assert!(interval.contains('b'));
        assert!(interval.contains('y'));
        assert!(!interval.contains('z'));
        assert!(!interval.contains('5'));
    }

    #[test]
    fn test_mixed_bounds() {
        let closed_open = chars("[a,c)");
        assert!(closed_open.contains('a'));
        assert!(!closed_open.contains('c'));

        let open_closed = chars("(a,c]");
        assert!(!open_closed.contains('a'));
        assert!(open_closed.contains('c'));
    }

    #[test]
    fn test_emptiness() {
        assert!(chars("(1,1)").is_empty());
        assert!(chars("(a,b)").is_empty());
        assert!(!chars("(a,c)").is_empty());
        assert!(chars("[a,a)").is_empty());
        assert!(chars("(a,a]").is_empty());
        assert!(!chars("[a,a]").is_empty());
        assert!(!chars("[a,b)").is_empty());
    }

    #[test]
    fn test_empty_interval_contains_nothing() {
        let empty = chars("(a,b)");
        assert!(!empty.contains('a'));
        assert!(!empty.contains('b'));
        assert!(!Interval::empty_at('x').contains('x'));
        assert!(Interval::point('x').contains('x'));
    }

    #[test]
    fn test_values() {
        let values: String = chars("(a,e]").values().collect();
        assert_eq!(values, "bcde");

        assert_eq!(chars("(a,b)").values().count(), 0);
        assert_eq!(Interval::closed(250u8, 255).unwrap().values().count(), 6);
    }

    #[test]
    fn test_char_successor_skips_surrogates() {
        assert_eq!('a'.successor(), Some('b'));
        assert_eq!('\u{D7FF}'.successor(), Some('\u{E000}'));
        assert_eq!(char::MAX.successor(), None);

        let gap = Interval::open('\u{D7FF}', '\u{E000}').unwrap();
        assert!(gap.is_empty());

        let top = Interval::open(char::MAX, char::MAX).unwrap();
        assert!(top.is_empty());
    }

    #[test]
    fn test_integer_intervals() {
        let interval: Interval<i32> = "(-2, 3]".parse().unwrap();
        assert!(!interval.contains(-2));
        assert!(interval.contains(-1));
        assert!(interval.contains(3));
        assert!(!interval.contains(4));

        let single: Interval<u8> = "(1,3)".parse().unwrap();
        assert!(!single.is_empty());
        assert!(single.contains(2));

        assert!(Interval::open(u8::MAX, u8::MAX).unwrap().is_empty());
    }

    #[test]
    fn test_code_point_bounds() {
        let upper = chars("[U+0041,U+005A]");
        assert_eq!(upper.lower(), 'A');
        assert_eq!(upper.upper(), 'Z');

        let printable = chars("[ ,~]");
        assert_eq!(printable.lower(), ' ');
    }

    #[test]
    fn test_parse_errors() {
        for notation in ["0,9", "[0,9", "0,9]", "[0 9]", "[ab,c]", "[]", "", "[9,0]"] {
            let err = notation.parse::<Interval<char>>().unwrap_err();
            assert!(err.is_invalid_argument(), "{notation:?} should be rejected");
        }
    }

    #[test]
    fn test_lower_above_upper_rejected() {
        assert!(Interval::closed('z', 'a').is_err());
        assert!(Interval::new(5, 1, true, true).is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for notation in ["[0,9]", "(a,z)", "[a,c)", "(1,1)"] {
            assert_eq!(chars(notation).to_string(), notation);
        }

        let spaced = chars("[ ,~]");
        assert_eq!(spaced.to_string(), "[U+0020,~]");
        assert_eq!(chars(&spaced.to_string()), spaced);
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(serde::Deserialize)]
        struct Doc {
            range: Interval<char>,
        }

        let doc: Doc = toml::from_str(r#"range = "[0,9]""#).unwrap();
        assert_eq!(doc.range, chars("[0,9]"));

        let bad = toml::from_str::<Doc>(r#"range = "0-9""#);
        assert!(bad.is_err());
    }
}
