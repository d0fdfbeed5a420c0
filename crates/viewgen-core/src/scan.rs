//! Entry discovery from existing interface files
//!
//! Instead of reading a schema, walk a project tree and rebuild the entry
//! lists from `.xib` files named `<Name>ViewController...`. A file is a
//! section when its contents mention the section base class.

use crate::config::NamingPolicy;
use crate::entry::{Entry, EntryKind};
use crate::error::{ViewgenError, ViewgenResult};
use crate::naming;
use crate::schema::ParsedSchema;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

const INTERFACE_EXTENSION: &str = "xib";

/// Discover sections and views under `root`, ordered by path
pub fn scan(root: &Path, prefix: &str, policy: &NamingPolicy) -> ViewgenResult<ParsedSchema> {
    let mut parsed = ParsedSchema::default();
    let marker = policy.suffixes.view_long.as_str();
    let section_marker = policy.suffixes.section_long.as_str();

    for item in WalkDir::new(root).sort_by_file_name() {
        let item = item.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            ViewgenError::io(path, err.into())
        })?;

        if !item.file_type().is_file() {
            continue;
        }

        let path = item.path();
        let is_interface = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(INTERFACE_EXTENSION));
        if !is_interface {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let pos = match stem.find(marker) {
            Some(pos) if pos > 0 => pos,
            _ => continue,
        };

        let contents = fs::read(path).map_err(|source| ViewgenError::io(path, source))?;
        let kind = if String::from_utf8_lossy(&contents).contains(section_marker) {
            EntryKind::Section
        } else {
            EntryKind::View
        };

        let canonical = naming::derive_canonical(&stem[..pos], prefix, policy);
        debug!(path = %path.display(), %kind, "discovered interface file");

        let entry = Entry::new(kind, canonical, stem.to_string());
        match kind {
            EntryKind::Section => parsed.sections.push(entry),
            EntryKind::View => parsed.views.push(entry),
        }
    }

    Ok(parsed)
}

#[cfg(test)]
#[path = "scan/scan_tests.rs"]
mod scan_tests;
