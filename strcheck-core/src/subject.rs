//! The string argument every predicate is evaluated against
//!
//! A borrowed `&str` can never be absent, but callers that hold an
//! `Option<String>` (a missing form field, an unset environment variable)
//! need the "absent string" case to surface as an error rather than as a
//! silent `false`. [`Subject`] is the seam that lets both shapes through.

use crate::error::{Error, Result};
use std::borrow::Cow;

/// A value that may or may not carry a string
pub trait Subject {
    /// The string, or `None` when the value is absent
    fn subject(&self) -> Option<&str>;
}

impl Subject for str {
    #[inline]
    fn subject(&self) -> Option<&str> {
        Some(self)
    }
}

impl Subject for String {
    #[inline]
    fn subject(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Subject for Cow<'_, str> {
    #[inline]
    fn subject(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: Subject + ?Sized> Subject for &T {
    #[inline]
    fn subject(&self) -> Option<&str> {
        (**self).subject()
    }
}

impl<T: AsRef<str>> Subject for Option<T> {
    #[inline]
    fn subject(&self) -> Option<&str> {
        self.as_ref().map(AsRef::as_ref)
    }
}

/// Resolve a subject, failing with `InvalidArgument` when it is absent
pub(crate) fn require<S: Subject + ?Sized>(value: &S) -> Result<&str> {
    value
        .subject()
        .ok_or_else(|| Error::invalid_argument("str", "string reference is absent"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_values() {
        assert_eq!(require("abc").unwrap(), "abc");
        assert_eq!(require(&String::from("abc")).unwrap(), "abc");
        assert_eq!(require(&Cow::Borrowed("abc")).unwrap(), "abc");
        assert_eq!(require(&Some("abc")).unwrap(), "abc");
        assert_eq!(require(&Some(String::new())).unwrap(), "");
    }

    #[test]
    fn test_absent_value_is_invalid_argument() {
        let absent: Option<&str> = None;
        let err = require(&absent).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
