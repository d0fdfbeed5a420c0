#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

const SECTION_XIB: &str = r#"<object class="IBProxyObject" customClass="WMLoginSectionViewController"><string key="superclass">MCSectionViewController</string></object>"#;
const VIEW_XIB: &str = r#"<object class="IBProxyObject" customClass="WMUsernameViewController"><string key="superclass">MCViewController</string></object>"#;

fn write(dir: &TempDir, rel: &str, contents: &str) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn scan_default(dir: &TempDir, prefix: &str) -> ParsedSchema {
    scan(dir.path(), prefix, &NamingPolicy::default()).unwrap()
}

#[test]
fn scan___classifies_by_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "WMLoginSectionViewController.xib", SECTION_XIB);
    write(&dir, "WMUsernameViewController.xib", VIEW_XIB);

    let parsed = scan_default(&dir, "WM");

    assert_eq!(parsed.sections.len(), 1);
    assert_eq!(parsed.sections[0].constant_name, "SECTION_LOGINSECTION");
    assert_eq!(parsed.sections[0].display_name, "WMLoginSectionViewController");
    assert_eq!(parsed.views.len(), 1);
    assert_eq!(parsed.views[0].constant_name, "VIEW_USERNAME");
    assert_eq!(parsed.views[0].display_name, "WMUsernameViewController");
}

#[test]
fn scan___walks_subdirectories_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "b/WMShopViewController.xib", VIEW_XIB);
    write(&dir, "a/WMAboutViewController.xib", VIEW_XIB);

    let parsed = scan_default(&dir, "WM");

    let names: Vec<&str> = parsed.views.iter().map(|e| e.canonical_name.as_str()).collect();
    assert_eq!(names, vec!["About", "Shop"]);
}

#[test]
fn scan___ignores_other_extensions_and_names() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "WMLoginViewController.h", VIEW_XIB);
    write(&dir, "WMLoginVC.xib", VIEW_XIB);
    write(&dir, "ViewController.xib", VIEW_XIB);
    write(&dir, "MainWindow.xib", VIEW_XIB);

    let parsed = scan_default(&dir, "WM");

    assert_eq!(parsed.entries().count(), 0);
}

#[test]
fn scan___extension_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "WMLoginViewController.XIB", VIEW_XIB);

    let parsed = scan_default(&dir, "WM");

    assert_eq!(parsed.views.len(), 1);
}

#[test]
fn scan___special_names___are_applied() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "MCMainViewController.xib", VIEW_XIB);

    let parsed = scan_default(&dir, "");

    assert_eq!(parsed.views[0].constant_name, "VIEW_BUILTIN_MAIN");
    assert_eq!(parsed.views[0].display_name, "MCMainViewController");
}

#[test]
fn scan___produces_no_warnings() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "WMLoginSectionViewController.xib", SECTION_XIB);
    write(&dir, "WMUsernameViewController.xib", VIEW_XIB);

    let parsed = scan_default(&dir, "WM");

    assert!(parsed.warnings.is_empty());
}

#[test]
fn scan___missing_root___is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = scan(&dir.path().join("nope"), "WM", &NamingPolicy::default());

    assert!(matches!(result, Err(ViewgenError::Io { .. })));
}
