#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("long", Mode::Long)]
#[test_case("short", Mode::Short)]
fn Mode___from_str___parses_known_modes(input: &str, expected: Mode) {
    assert_eq!(input.parse::<Mode>().unwrap(), expected);
}

#[test_case("LONG")]
#[test_case("medium")]
#[test_case("")]
fn Mode___from_str___rejects_other_strings(input: &str) {
    let result = input.parse::<Mode>();

    assert!(matches!(result, Err(ViewgenError::InvalidMode(_))));
}

#[test]
fn Mode___display___roundtrips_through_from_str() {
    for mode in [Mode::Long, Mode::Short] {
        assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
    }
}

#[test]
fn Entry___new___derives_constant_name() {
    let entry = Entry::new(
        EntryKind::Section,
        "Login".to_string(),
        "WMLoginSectionViewController".to_string(),
    );

    assert_eq!(entry.constant_name, "SECTION_LOGIN");
}

#[test]
fn EntryKind___display___is_lowercase() {
    assert_eq!(EntryKind::Section.to_string(), "section");
    assert_eq!(EntryKind::View.to_string(), "view");
}
