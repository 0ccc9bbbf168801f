//! Property tests for the classification laws and negation wrappers

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};
use strcheck_core::{
    in_dictionary, in_keys, in_values, is_in, is_in_set, is_limited_to_range,
    is_limited_to_set_of, is_not_in, is_not_in_set, not_in_dictionary, not_in_keys,
    not_in_values, CharacterSet, Interval, MatchOptions,
};

fn small_text() -> impl Strategy<Value = String> {
    "[a-f0-9]{0,8}"
}

fn dictionary() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-f]{1,4}", "[a-f]{0,6}", 0..6)
}

proptest! {
    #[test]
    fn set_limit_matches_membership(text in small_text(), members in "[a-f0-9]{0,10}") {
        let set = CharacterSet::from(members.as_str());
        let expected = if text.is_empty() {
            set.is_empty()
        } else {
            text.chars().all(|ch| set.contains(ch))
        };

        prop_assert_eq!(is_limited_to_set_of(text.as_str(), &set).unwrap(), expected);
    }

    #[test]
    fn range_limit_matches_bounds(
        text in small_text(),
        a in proptest::char::range('0', 'z'),
        b in proptest::char::range('0', 'z'),
        lower_inclusive in any::<bool>(),
        upper_inclusive in any::<bool>(),
    ) {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        let interval = Interval::new(lower, upper, lower_inclusive, upper_inclusive).unwrap();

        let expected = if text.is_empty() {
            interval.is_empty()
        } else {
            text.chars().all(|ch| {
                let above = if lower_inclusive { ch >= lower } else { ch > lower };
                let below = if upper_inclusive { ch <= upper } else { ch < upper };
                above && below
            })
        };

        prop_assert_eq!(is_limited_to_range(text.as_str(), &interval).unwrap(), expected);
    }

    #[test]
    fn interval_emptiness_agrees_with_values(
        a in proptest::char::range('a', 'h'),
        b in proptest::char::range('a', 'h'),
        lower_inclusive in any::<bool>(),
        upper_inclusive in any::<bool>(),
    ) {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        let interval = Interval::new(lower, upper, lower_inclusive, upper_inclusive).unwrap();

        prop_assert_eq!(interval.is_empty(), interval.values().next().is_none());
    }

    #[test]
    fn notation_round_trips(
        a in any::<char>(),
        b in any::<char>(),
        lower_inclusive in any::<bool>(),
        upper_inclusive in any::<bool>(),
    ) {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        let interval = Interval::new(lower, upper, lower_inclusive, upper_inclusive).unwrap();

        let reparsed: Interval<char> = interval.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, interval);
    }

    #[test]
    fn sequence_negation(needle in "[a-c]{0,2}", items in prop::collection::vec("[a-c]{0,2}", 0..5)) {
        prop_assert_eq!(
            is_not_in(needle.as_str(), &items).unwrap(),
            !is_in(needle.as_str(), &items).unwrap()
        );

        let set: HashSet<String> = items.iter().cloned().collect();
        prop_assert_eq!(
            is_not_in_set(needle.as_str(), &set).unwrap(),
            !is_in_set(needle.as_str(), &set).unwrap()
        );
        prop_assert_eq!(is_in_set(needle.as_str(), &set).unwrap(), is_in(needle.as_str(), &items).unwrap());
    }

    #[test]
    fn dictionary_negation(
        needle in "[a-f]{0,3}",
        dict in dictionary(),
        partial_keys in any::<bool>(),
        partial_values in any::<bool>(),
    ) {
        let mut options = MatchOptions::new();
        if partial_keys {
            options = options.partial_keys();
        }
        if partial_values {
            options = options.partial_values();
        }

        prop_assert_eq!(
            not_in_dictionary(needle.as_str(), &dict, options).unwrap(),
            !in_dictionary(needle.as_str(), &dict, options).unwrap()
        );
        prop_assert_eq!(
            not_in_values(needle.as_str(), &dict, options.value).unwrap(),
            !in_values(needle.as_str(), &dict, options.value).unwrap()
        );

        match (in_keys(needle.as_str(), &dict), not_in_keys(needle.as_str(), &dict)) {
            (Ok(found), Ok(missing)) => prop_assert_eq!(missing, !found),
            (Err(_), Err(_)) => prop_assert!(needle.is_empty()),
            _ => prop_assert!(false, "in_keys and not_in_keys disagree on failure"),
        }
    }

    #[test]
    fn whole_match_never_accepts_substring_only(needle in "[a-f]{1,3}", dict in dictionary()) {
        let exact = dict.contains_key(&needle) || dict.values().any(|value| value == &needle);
        prop_assert_eq!(in_dictionary(needle.as_str(), &dict, MatchOptions::new()).unwrap(), exact);
    }
}
