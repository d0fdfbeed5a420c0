//! Existing-artifact detection across naming conventions
//!
//! A view may already exist on disk as `FooViewController.h` or `FooVC.h`
//! depending on which mode generated it. Before creating a file the
//! materializer asks this module whether either spelling is present, so a
//! schema switched from long to short names never duplicates a view.
//! Section names are only checked against the two section suffixes and view
//! names against the two view suffixes.

use crate::config::SuffixSet;
use crate::error::{ViewgenError, ViewgenResult};
use std::path::{Path, PathBuf};

/// Split a display name into its root and the long/short suffix pair of its
/// kind.
///
/// Section suffixes are tested before view suffixes since each section
/// suffix ends with the matching view suffix.
fn split_suffix<'a>(name: &'a str, suffixes: &'a SuffixSet) -> Option<(&'a str, [&'a str; 2])> {
    let section_pair = [suffixes.section_long.as_str(), suffixes.section_short.as_str()];
    let view_pair = [suffixes.view_long.as_str(), suffixes.view_short.as_str()];

    let ordered = [
        (suffixes.section_long.as_str(), section_pair),
        (suffixes.section_short.as_str(), section_pair),
        (suffixes.view_long.as_str(), view_pair),
        (suffixes.view_short.as_str(), view_pair),
    ];

    ordered
        .into_iter()
        .find_map(|(suffix, pair)| name.strip_suffix(suffix).map(|root| (root, pair)))
}

/// Find an existing file for `display_name` under either naming convention.
///
/// `extension` includes the leading dot (`.xib`). Returns the long-form path
/// when both exist, `None` when neither does, and
/// [`ViewgenError::UnrecognizedSuffix`] when `display_name` ends in none of
/// the four suffixes.
pub fn resolve(
    dir: &Path,
    display_name: &str,
    extension: &str,
    suffixes: &SuffixSet,
) -> ViewgenResult<Option<PathBuf>> {
    let (root, pair) =
        split_suffix(display_name, suffixes).ok_or_else(|| ViewgenError::UnrecognizedSuffix {
            name: display_name.to_string(),
        })?;

    let found = pair
        .iter()
        .map(|suffix| dir.join(format!("{root}{suffix}{extension}")))
        .find(|candidate| candidate.is_file());

    Ok(found)
}
