//! Schema parsing
//!
//! A schema lists sections and their views, one name per line:
//!
//! ```text
//! # comment
//! Login:
//!      Username
//!      Password
//! ```
//!
//! A trailing `:` opens a section. Indentation is cosmetic; the only nesting
//! the parser tracks is the most recent section, used to warn about views
//! whose names do not contain their section's name.

use crate::config::NamingPolicy;
use crate::entry::{Entry, EntryKind, Mode};
use crate::error::{ViewgenError, ViewgenResult};
use crate::naming;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Characters that start a comment line
const COMMENT_MARKERS: [char; 4] = ['#', '/', '\'', '`'];

/// A view whose canonical name does not contain its section's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaWarning {
    /// 1-based line number in the schema document
    pub line: usize,
    pub name: String,
    pub section: String,
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "View name should have the same prefix as its owning section: {} (section {}, line {})",
            self.name, self.section, self.line
        )
    }
}

/// Result of parsing a schema: sections and views in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSchema {
    pub sections: Vec<Entry>,
    pub views: Vec<Entry>,
    pub warnings: Vec<SchemaWarning>,
}

impl ParsedSchema {
    /// Sections first, then views
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.sections.iter().chain(self.views.iter())
    }

    /// Constant names used by more than one entry, in first-seen order.
    ///
    /// Duplicates are not rejected; the caller decides whether to report them.
    pub fn duplicate_constants(&self) -> Vec<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut order = Vec::new();

        for entry in self.entries() {
            let count = counts.entry(entry.constant_name.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(entry.constant_name.as_str());
            }
        }

        order
    }

    fn push(&mut self, entry: Entry) {
        match entry.kind {
            EntryKind::Section => self.sections.push(entry),
            EntryKind::View => self.views.push(entry),
        }
    }
}

/// Line-by-line schema parser
pub struct SchemaParser<'a> {
    policy: &'a NamingPolicy,
    prefix: &'a str,
    mode: Mode,
}

impl<'a> SchemaParser<'a> {
    pub fn new(policy: &'a NamingPolicy, prefix: &'a str, mode: Mode) -> Self {
        Self {
            policy,
            prefix,
            mode,
        }
    }

    /// Parse a whole schema document
    pub fn parse(&self, document: &str) -> ParsedSchema {
        let mut parsed = ParsedSchema::default();
        let mut current_section = String::new();

        for (idx, raw) in document.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKERS) {
                continue;
            }

            let (entry, opens_section) = self.parse_line(line);

            if opens_section {
                current_section = entry.canonical_name.clone();
            } else if !entry.canonical_name.contains(current_section.as_str()) {
                let warning = SchemaWarning {
                    line: idx + 1,
                    name: entry.canonical_name.clone(),
                    section: current_section.clone(),
                };
                warn!("{warning}");
                parsed.warnings.push(warning);
            }

            debug!(
                kind = %entry.kind,
                display_name = %entry.display_name,
                constant = %entry.constant_name,
                "parsed schema entry"
            );
            parsed.push(entry);
        }

        parsed
    }

    /// Parse one trimmed, non-comment line.
    ///
    /// Returns the entry and whether the line itself opened a section (ended
    /// in `:`). The entry may still be filed as a section without opening
    /// one when its name ends in the long section suffix.
    fn parse_line(&self, line: &str) -> (Entry, bool) {
        let suffixes = &self.policy.suffixes;

        let (mut name, is_section) = match line.strip_suffix(':') {
            Some(stripped) => (stripped.to_string(), true),
            None => (line.to_string(), false),
        };

        let split = suffixes
            .candidates()
            .iter()
            .find_map(|candidate| name.find(candidate.pattern));

        let pos = match split {
            Some(pos) => pos,
            None => {
                let pos = name.len();
                let kind = if is_section {
                    EntryKind::Section
                } else {
                    EntryKind::View
                };
                name.push_str(suffixes.for_kind(kind, self.mode));
                pos
            }
        };

        let canonical = naming::derive_canonical(&name[..pos], self.prefix, self.policy);

        let kind = if is_section || ends_with_ignore_case(&name, &suffixes.section_long) {
            EntryKind::Section
        } else {
            EntryKind::View
        };

        let display_name = format!("{}{}", self.prefix, name);
        (Entry::new(kind, canonical, display_name), is_section)
    }
}

/// Parse a schema document
pub fn parse(document: &str, prefix: &str, mode: Mode, policy: &NamingPolicy) -> ParsedSchema {
    SchemaParser::new(policy, prefix, mode).parse(document)
}

/// Read and parse a schema file
pub fn parse_file(
    path: impl AsRef<Path>,
    prefix: &str,
    mode: Mode,
    policy: &NamingPolicy,
) -> ViewgenResult<ParsedSchema> {
    let path = path.as_ref();
    let document =
        std::fs::read_to_string(path).map_err(|source| ViewgenError::io(path, source))?;

    Ok(parse(&document, prefix, mode, policy))
}

/// Case-insensitive comparison of the last `suffix.len()` characters.
///
/// A name shorter than the suffix is compared as a whole.
fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    let suffix_len = suffix.chars().count();
    let skip = name.chars().count().saturating_sub(suffix_len);
    let tail: String = name.chars().skip(skip).collect();

    tail.to_lowercase() == suffix.to_lowercase()
}
