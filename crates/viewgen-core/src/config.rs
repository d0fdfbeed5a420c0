//! Naming and template configuration
//!
//! Every table the generator consults (suffixes, special names, base classes,
//! template files) lives here and is passed explicitly into the parser,
//! resolver and materializer. [`Config::default`] reproduces the conventions
//! of the view factory; a `viewgen.toml` file can override any of them.
//!
//! ```toml
//! [naming.suffixes]
//! view_short = "Ctl"
//!
//! [naming.special_names]
//! MCMain = "Builtin_Main"
//!
//! [templates]
//! extensions = ["xib", "h", "m"]
//! ```

use crate::entry::{EntryKind, Mode};
use crate::error::{ViewgenError, ViewgenResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingPolicy,

    #[serde(default)]
    pub templates: TemplatePolicy,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ViewgenResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ViewgenError::io(path, source))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> ViewgenResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ViewgenResult<()> {
        let suffixes = &self.naming.suffixes;
        for pattern in suffixes.candidates() {
            if pattern.pattern.is_empty() {
                return Err(ViewgenError::Config(format!(
                    "{} {} suffix cannot be empty",
                    pattern.length, pattern.kind
                )));
            }
        }

        if self.templates.extensions.is_empty() {
            return Err(ViewgenError::Config(
                "at least one template extension is required".to_string(),
            ));
        }

        for ext in &self.templates.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(ViewgenError::Config(format!(
                    "template extension must be non-empty and given without a dot: '{ext}'"
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Naming Policy
// ============================================================================

/// Rules for turning schema lines into identifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingPolicy {
    #[serde(default)]
    pub suffixes: SuffixSet,

    /// Canonical names that are replaced wholesale after prefix stripping
    #[serde(default = "default_special_names")]
    pub special_names: BTreeMap<String, String>,
}

fn default_special_names() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("MCMain".to_string(), "Builtin_Main".to_string()),
        ("MCError".to_string(), "Builtin_Error".to_string()),
    ])
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self {
            suffixes: SuffixSet::default(),
            special_names: default_special_names(),
        }
    }
}

/// The four recognized class-name suffixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuffixSet {
    pub section_long: String,
    pub view_long: String,
    pub section_short: String,
    pub view_short: String,
}

impl Default for SuffixSet {
    fn default() -> Self {
        Self {
            section_long: "SectionViewController".to_string(),
            view_long: "ViewController".to_string(),
            section_short: "SectionVC".to_string(),
            view_short: "VC".to_string(),
        }
    }
}

/// A suffix together with the kind and length it denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixPattern<'a> {
    pub pattern: &'a str,
    pub kind: EntryKind,
    pub length: Mode,
}

impl SuffixSet {
    /// Suffixes in search priority order.
    ///
    /// The order matters: `SectionViewController` contains `ViewController`,
    /// and `SectionVC` contains `VC`.
    pub fn candidates(&self) -> [SuffixPattern<'_>; 4] {
        [
            SuffixPattern {
                pattern: &self.section_long,
                kind: EntryKind::Section,
                length: Mode::Long,
            },
            SuffixPattern {
                pattern: &self.view_long,
                kind: EntryKind::View,
                length: Mode::Long,
            },
            SuffixPattern {
                pattern: &self.section_short,
                kind: EntryKind::Section,
                length: Mode::Short,
            },
            SuffixPattern {
                pattern: &self.view_short,
                kind: EntryKind::View,
                length: Mode::Short,
            },
        ]
    }

    /// Suffix appended when the schema line carries none
    pub fn for_kind(&self, kind: EntryKind, mode: Mode) -> &str {
        match (kind, mode) {
            (EntryKind::Section, Mode::Long) => self.section_long.as_str(),
            (EntryKind::View, Mode::Long) => self.view_long.as_str(),
            (EntryKind::Section, Mode::Short) => self.section_short.as_str(),
            (EntryKind::View, Mode::Short) => self.view_short.as_str(),
        }
    }
}

// ============================================================================
// Template Policy
// ============================================================================

/// Which templates to use and what to substitute into them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatePolicy {
    /// Template stem for sections; files are `<stem>.<ext>.template`
    pub section_template: String,
    pub view_template: String,

    /// Extensions to materialize, in order, without the leading dot
    pub extensions: Vec<String>,

    pub section_base_class: String,
    pub view_base_class: String,

    /// Base classes for specific canonical names
    pub base_class_overrides: BTreeMap<String, String>,
}

impl Default for TemplatePolicy {
    fn default() -> Self {
        Self {
            section_template: "TemplateSectionViewController".to_string(),
            view_template: "TemplateViewController".to_string(),
            extensions: vec!["xib".to_string(), "h".to_string(), "m".to_string()],
            section_base_class: "MCSectionViewController".to_string(),
            view_base_class: "MCViewController".to_string(),
            base_class_overrides: BTreeMap::from([
                (
                    "Builtin_Main".to_string(),
                    "MCMainViewController".to_string(),
                ),
                (
                    "Builtin_Error".to_string(),
                    "MCErrorViewController".to_string(),
                ),
            ]),
        }
    }
}

impl TemplatePolicy {
    /// Template file name for a kind and extension
    pub fn template_file(&self, kind: EntryKind, ext: &str) -> String {
        let stem = match kind {
            EntryKind::Section => &self.section_template,
            EntryKind::View => &self.view_template,
        };
        format!("{stem}.{ext}.template")
    }

    /// Base class for an entry, honouring the per-name overrides
    pub fn base_class(&self, kind: EntryKind, canonical_name: &str) -> &str {
        if let Some(base) = self.base_class_overrides.get(canonical_name) {
            return base.as_str();
        }

        match kind {
            EntryKind::Section => self.section_base_class.as_str(),
            EntryKind::View => self.view_base_class.as_str(),
        }
    }
}
