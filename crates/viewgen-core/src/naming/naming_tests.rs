#![allow(non_snake_case)]

use super::*;
use std::collections::BTreeMap;
use test_case::test_case;

// strip_prefix tests

#[test]
fn strip_prefix___matching_two_letter_prefix___removes_it() {
    assert_eq!(strip_prefix("WMLogin", "WM"), "Login");
}

#[test]
fn strip_prefix___non_matching_prefix___unchanged() {
    assert_eq!(strip_prefix("Login", "WM"), "Login");
}

#[test]
fn strip_prefix___empty_prefix___unchanged() {
    assert_eq!(strip_prefix("WMLogin", ""), "WMLogin");
}

#[test_case("ABCLogin", "ABC", "CLogin"; "three letter prefix")]
#[test_case("WLogin", "W", "ogin"; "one letter prefix")]
#[test_case("ABCDEFName", "ABCDEF", "CDEFName"; "six letter prefix")]
fn strip_prefix___any_prefix_length___removes_exactly_two_chars(
    name: &str,
    prefix: &str,
    expected: &str,
) {
    assert_eq!(strip_prefix(name, prefix), expected);
}

#[test]
fn strip_prefix___name_equal_to_one_char_prefix___returns_empty() {
    assert_eq!(strip_prefix("W", "W"), "");
}

#[test]
fn strip_prefix___multibyte_chars___counts_characters() {
    assert_eq!(strip_prefix("ÉÉLogin", "ÉÉ"), "Login");
}

// apply_special_names tests

#[test_case("MCMain", "Builtin_Main")]
#[test_case("MCError", "Builtin_Error")]
#[test_case("Login", "Login")]
#[test_case("MCMainView", "MCMainView")]
#[test_case("mcmain", "mcmain")]
fn apply_special_names___default_table___maps_only_builtins(name: &str, expected: &str) {
    let policy = NamingPolicy::default();

    assert_eq!(apply_special_names(name, &policy), expected);
}

#[test]
fn apply_special_names___custom_table___uses_it() {
    let policy = NamingPolicy {
        special_names: BTreeMap::from([("Home".to_string(), "Builtin_Home".to_string())]),
        ..NamingPolicy::default()
    };

    assert_eq!(apply_special_names("Home", &policy), "Builtin_Home");
    assert_eq!(apply_special_names("MCMain", &policy), "MCMain");
}

// derive_canonical tests

#[test]
fn derive_canonical___strips_then_substitutes() {
    let policy = NamingPolicy::default();

    assert_eq!(derive_canonical("XXMCMain", "XX", &policy), "Builtin_Main");
}

#[test]
fn derive_canonical___prefix_matching_builtin___strips_first() {
    let policy = NamingPolicy::default();

    assert_eq!(derive_canonical("MCMain", "MC", &policy), "Main");
}

// constant_name tests

#[test]
fn constant_name___section___uses_section_prefix() {
    assert_eq!(constant_name(EntryKind::Section, "Login"), "SECTION_LOGIN");
}

#[test]
fn constant_name___view___uses_view_prefix() {
    assert_eq!(constant_name(EntryKind::View, "Username"), "VIEW_USERNAME");
}

#[test]
fn constant_name___builtin___keeps_underscore() {
    assert_eq!(constant_name(EntryKind::View, "Builtin_Main"), "VIEW_BUILTIN_MAIN");
}
