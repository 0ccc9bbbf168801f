//! Path separator normalization

use crate::error::Result;
use crate::subject::{require, Subject};
use std::path::MAIN_SEPARATOR;

/// Rewrite every `/` and `\` to the host's separator
pub fn correct_os_path_separators<S: Subject + ?Sized>(s: &S) -> Result<String> {
    replace_path_separators(s, MAIN_SEPARATOR)
}

/// Rewrite every `/` and `\` to `separator`
pub fn replace_path_separators<S: Subject + ?Sized>(s: &S, separator: char) -> Result<String> {
    let s = require(s)?;
    Ok(s.chars()
        .map(|ch| if matches!(ch, '/' | '\\') { separator } else { ch })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_separators() {
        assert_eq!(replace_path_separators(r"a\b/c", '/').unwrap(), "a/b/c");
        assert_eq!(replace_path_separators("a/b\\c", '\\').unwrap(), r"a\b\c");
        assert_eq!(replace_path_separators("", '/').unwrap(), "");
        assert_eq!(replace_path_separators("plain", '/').unwrap(), "plain");
    }

    #[test]
    fn test_host_separator() {
        let corrected = correct_os_path_separators(r"dir\sub/file.txt").unwrap();
        let expected: String = ["dir", "sub", "file.txt"].join(&MAIN_SEPARATOR.to_string());
        assert_eq!(corrected, expected);
    }

    #[test]
    fn test_absent_path() {
        let absent: Option<String> = None;
        assert!(correct_os_path_separators(&absent)
            .unwrap_err()
            .is_invalid_argument());
    }
}
