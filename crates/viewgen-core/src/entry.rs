//! Entry types shared by the parser, materializer and emitter

use crate::error::ViewgenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an entry is a section (container) or a plain view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Section,
    View,
}

impl EntryKind {
    /// Prefix used when forming the constant name
    pub fn constant_prefix(self) -> &'static str {
        match self {
            EntryKind::Section => "SECTION_",
            EntryKind::View => "VIEW_",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Section => write!(f, "section"),
            EntryKind::View => write!(f, "view"),
        }
    }
}

/// Suffix length used when the schema omits a suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// `SectionViewController` / `ViewController`
    #[default]
    Long,
    /// `SectionVC` / `VC`
    Short,
}

impl FromStr for Mode {
    type Err = ViewgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(Mode::Long),
            "short" => Ok(Mode::Short),
            other => Err(ViewgenError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Long => write!(f, "long"),
            Mode::Short => write!(f, "short"),
        }
    }
}

/// One section or view declared in a schema (or discovered on disk)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    /// Prefix-stripped, special-name-substituted stem (e.g. `Login`)
    pub canonical_name: String,
    /// File stem and string used in generated code (e.g. `WMLoginViewController`)
    pub display_name: String,
    /// `SECTION_LOGIN`, `VIEW_USERNAME`, ...
    pub constant_name: String,
}

impl Entry {
    pub fn new(kind: EntryKind, canonical_name: String, display_name: String) -> Self {
        let constant_name = crate::naming::constant_name(kind, &canonical_name);
        Self {
            kind,
            canonical_name,
            display_name,
            constant_name,
        }
    }
}

#[cfg(test)]
#[path = "entry/entry_tests.rs"]
mod entry_tests;
