//! Property-Based Tests
//!
//! Invariants of the class list operations over arbitrary attribute strings
//! and tokens, using proptest.

use fos_classlist::host::ClassNameProperty;
use fos_classlist::{class_list, HtmlElement, Regex};
use proptest::prelude::*;

/// Class attribute strings: tokens separated by arbitrary HTML whitespace
fn attribute() -> impl Strategy<Value = String> {
    "[ \t\n\x0C\r]{0,3}([a-z0-9-]{1,6}[ \t\n\x0C\r]{1,3}){0,8}[a-z0-9-]{0,6}[ \t\n\x0C\r]{0,3}"
}

fn token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,6}"
}

fn element(class: &str) -> HtmlElement {
    HtmlElement::new("div").with_class(class)
}

/// Property: to_array matches a plain whitespace split
#[test]
fn proptest_to_array_matches_split() {
    proptest!(|(class in attribute())| {
        let mut el = element(&class);
        let list = class_list(&mut el).unwrap();
        let expected: Vec<String> = class
            .split([' ', '\t', '\n', '\x0C', '\r'])
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        prop_assert_eq!(list.to_array(), expected.clone());
        prop_assert_eq!(list.to_array(), expected);
    });
}

/// Property: add is idempotent
#[test]
fn proptest_add_idempotent() {
    proptest!(|(class in attribute(), t in token())| {
        let mut once = element(&class);
        class_list(&mut once).unwrap().add(&t).unwrap();

        let mut twice = element(&class);
        {
            let mut list = class_list(&mut twice).unwrap();
            list.add(&t).unwrap();
            list.add(&t).unwrap();
        }
        prop_assert_eq!(once.class_name(), twice.class_name());
        prop_assert!(class_list(&mut once).unwrap().contains(&t).unwrap());
    });
}

/// Property: toggle without force alternates membership
#[test]
fn proptest_toggle_alternates() {
    proptest!(|(class in attribute(), t in token())| {
        let mut el = element(&class);
        let mut list = class_list(&mut el).unwrap();
        let first = list.toggle(&t, None).unwrap();
        prop_assert_eq!(list.contains(&t).unwrap(), first);
        let second = list.toggle(&t, None).unwrap();
        prop_assert_eq!(second, !first);
        prop_assert_eq!(list.contains(&t).unwrap(), second);
    });
}

/// Property: toggle with force returns force and pins membership
#[test]
fn proptest_toggle_force() {
    proptest!(|(class in attribute(), t in token(), force in any::<bool>())| {
        let mut el = element(&class);
        let mut list = class_list(&mut el).unwrap();
        prop_assert_eq!(list.toggle(&t, Some(force)).unwrap(), force);
        prop_assert_eq!(list.toggle(&t, Some(force)).unwrap(), force);
        prop_assert_eq!(list.contains(&t).unwrap(), force);
    });
}

/// Property: pattern removal drops exactly the matches and keeps order
#[test]
fn proptest_remove_pattern_keeps_order() {
    proptest!(|(class in attribute())| {
        let pattern = Regex::new("^[a-m]").unwrap();
        let mut el = element(&class);
        let mut list = class_list(&mut el).unwrap();
        let mut expected: Vec<String> = Vec::new();
        for t in list.to_array() {
            if !pattern.is_match(&t) && !expected.contains(&t) {
                expected.push(t);
            }
        }
        list.remove(&pattern).unwrap();
        prop_assert_eq!(list.to_array(), expected);
    });
}
