//! Identifier derivation.
//!
//! Turns a raw schema token (or a file stem found on disk) into the canonical
//! name used for constants.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `WMLogin`, prefix `WM` | [`strip_prefix`] | `Login` |
//! | `MCMain` | [`apply_special_names`] | `Builtin_Main` |
//! | `Login` (section) | [`constant_name`] | `SECTION_LOGIN` |

use crate::config::NamingPolicy;
use crate::entry::EntryKind;

/// Remove a class prefix from a name.
///
/// When `prefix` is non-empty and `name` starts with it, exactly the first
/// two characters are removed, whatever the length of `prefix`. Existing
/// schemas rely on two-letter prefixes being handled this way, so longer
/// prefixes are only partially stripped.
///
/// # Examples
///
/// ```
/// use viewgen_core::naming::strip_prefix;
///
/// assert_eq!(strip_prefix("WMLogin", "WM"), "Login");
/// assert_eq!(strip_prefix("Login", "WM"), "Login");
/// assert_eq!(strip_prefix("ABCLogin", "ABC"), "CLogin");
/// ```
pub fn strip_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() || !name.starts_with(prefix) {
        return name;
    }

    match name.char_indices().nth(2) {
        Some((idx, _)) => &name[idx..],
        None => "",
    }
}

/// Replace names that have a dedicated built-in identity.
///
/// # Examples
///
/// ```
/// use viewgen_core::config::NamingPolicy;
/// use viewgen_core::naming::apply_special_names;
///
/// let policy = NamingPolicy::default();
/// assert_eq!(apply_special_names("MCMain", &policy), "Builtin_Main");
/// assert_eq!(apply_special_names("Login", &policy), "Login");
/// ```
pub fn apply_special_names<'a>(name: &'a str, policy: &'a NamingPolicy) -> &'a str {
    policy
        .special_names
        .get(name)
        .map(String::as_str)
        .unwrap_or(name)
}

/// Canonical name for a stem: prefix stripped, then special names applied
pub fn derive_canonical(stem: &str, prefix: &str, policy: &NamingPolicy) -> String {
    apply_special_names(strip_prefix(stem, prefix), policy).to_string()
}

/// Constant name for an entry, e.g. `VIEW_USERNAME`
pub fn constant_name(kind: EntryKind, canonical_name: &str) -> String {
    format!(
        "{}{}",
        kind.constant_prefix(),
        canonical_name.to_uppercase()
    )
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
