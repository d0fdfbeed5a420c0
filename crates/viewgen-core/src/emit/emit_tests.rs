#![allow(non_snake_case)]

use super::*;
use crate::config::NamingPolicy;
use crate::entry::{EntryKind, Mode};
use crate::schema;

fn views(count: usize) -> Vec<Entry> {
    (1..=count)
        .map(|i| {
            Entry::new(
                EntryKind::View,
                format!("Page{i}"),
                format!("WMPage{i}ViewController"),
            )
        })
        .collect()
}

// emit_definitions

#[test]
fn emit_definitions___pads_define_token_to_thirty_columns() {
    let entries = vec![Entry::new(
        EntryKind::Section,
        "Login".to_string(),
        "WMLoginSectionViewController".to_string(),
    )];

    let out = emit_definitions(&entries);

    assert_eq!(
        out,
        "#define SECTION_LOGIN          @\"WMLoginSectionViewController\" \n"
    );
}

#[test]
fn emit_definitions___long_constant___is_not_truncated() {
    let entries = vec![Entry::new(
        EntryKind::View,
        "AVeryLongCanonicalViewName".to_string(),
        "AVeryLongCanonicalViewNameVC".to_string(),
    )];

    let out = emit_definitions(&entries);

    assert_eq!(
        out,
        "#define VIEW_AVERYLONGCANONICALVIEWNAME @\"AVeryLongCanonicalViewNameVC\" \n"
    );
}

#[test]
fn emit_definitions___every_fifth_line___gets_ordinal_comment() {
    let out = emit_definitions(&views(10));

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[4].ends_with("\"WMPage5ViewController\"  // 5"));
    assert!(lines[9].ends_with("\"WMPage10ViewController\"  // 10"));
    for (i, line) in lines.iter().enumerate() {
        if (i + 1) % 5 != 0 {
            assert!(!line.contains("//"), "line {} has a comment: {line}", i + 1);
        }
    }
}

#[test]
fn emit_definitions___empty___is_empty() {
    assert_eq!(emit_definitions(&[]), "");
}

// emit_registrations

#[test]
fn emit_registrations___one_call_per_entry_in_order() {
    let out = emit_registrations(&views(3));

    assert_eq!(
        out,
        "[factory registerView:VIEW_PAGE1];\n[factory registerView:VIEW_PAGE2];\n[factory registerView:VIEW_PAGE3];\n"
    );
}

#[test]
fn emit_registrations___fifth_line___gets_ordinal_comment() {
    let out = emit_registrations(&views(5));

    assert_eq!(
        out.lines().last(),
        Some("[factory registerView:VIEW_PAGE5]; // 5")
    );
}

#[test]
fn emit_registrations___duplicates___are_kept() {
    let mut entries = views(1);
    entries.push(entries[0].clone());

    let out = emit_registrations(&entries);

    assert_eq!(out.lines().count(), 2);
}

// render_report

#[test]
fn render_report___login_schema___matches_expected_layout() {
    let parsed = schema::parse(
        "Login:\n     Username\n     Password\n",
        "WM",
        Mode::Long,
        &NamingPolicy::default(),
    );

    let out = render_report(&parsed);

    let expected = concat!(
        "// Include the following lines in a reusable header file\n",
        "#define SECTION_LOGIN          @\"WMLoginSectionViewController\" \n",
        "#define VIEW_USERNAME          @\"WMUsernameViewController\" \n",
        "#define VIEW_PASSWORD          @\"WMPasswordViewController\" \n",
        "\n",
        "// Include the following lines in application:didFinishLaunchingWithOptions:\n",
        "MCViewFactory *factory = [MCViewFactory sharedFactory];\n",
        "[factory registerView:SECTION_LOGIN];\n",
        "[factory registerView:VIEW_USERNAME];\n",
        "[factory registerView:VIEW_PASSWORD];\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn render_report___ordinals_restart_for_views() {
    let parsed = ParsedSchema {
        sections: (1..=4)
            .map(|i| {
                Entry::new(
                    EntryKind::Section,
                    format!("S{i}"),
                    format!("S{i}SectionViewController"),
                )
            })
            .collect(),
        views: views(5),
        warnings: Vec::new(),
    };

    let out = render_report(&parsed);

    // 4 sections + 5 views: only the fifth view is numbered, as 5
    assert_eq!(out.matches("// 5").count(), 2);
    assert!(!out.contains("// 9"));
}
