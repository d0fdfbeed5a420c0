//! Template placeholder substitution
//!
//! Templates are opaque text with `{{ key }}` tokens. Substitution is a flat
//! text replace per known key; unknown tokens are left as they are.
//!
//! The default templates are compiled into the binary; a template directory
//! replaces them wholesale.

use crate::error::{ViewgenError, ViewgenResult};
use chrono::{Datelike, Local, NaiveDate};
use std::path::{Path, PathBuf};

// ============================================================================
// Embedded Templates
// ============================================================================

mod embedded {
    // Section templates
    pub const SECTION_XIB: &str =
        include_str!("../../../templates/TemplateSectionViewController.xib.template");
    pub const SECTION_H: &str =
        include_str!("../../../templates/TemplateSectionViewController.h.template");
    pub const SECTION_M: &str =
        include_str!("../../../templates/TemplateSectionViewController.m.template");

    // View templates
    pub const VIEW_XIB: &str =
        include_str!("../../../templates/TemplateViewController.xib.template");
    pub const VIEW_H: &str = include_str!("../../../templates/TemplateViewController.h.template");
    pub const VIEW_M: &str = include_str!("../../../templates/TemplateViewController.m.template");
}

/// Built-in template for a `<stem>.<ext>.template` file name
pub fn builtin_template(file_name: &str) -> Option<&'static str> {
    let contents = match file_name {
        "TemplateSectionViewController.xib.template" => embedded::SECTION_XIB,
        "TemplateSectionViewController.h.template" => embedded::SECTION_H,
        "TemplateSectionViewController.m.template" => embedded::SECTION_M,
        "TemplateViewController.xib.template" => embedded::VIEW_XIB,
        "TemplateViewController.h.template" => embedded::VIEW_H,
        "TemplateViewController.m.template" => embedded::VIEW_M,
        _ => return None,
    };
    Some(contents)
}

/// Where template files are read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    #[default]
    Builtin,
    /// `<dir>/<stem>.<ext>.template` files
    Dir(PathBuf),
}

impl TemplateSource {
    /// Load the template named `file_name`
    pub fn load(&self, file_name: &str) -> ViewgenResult<String> {
        match self {
            TemplateSource::Builtin => builtin_template(file_name)
                .map(str::to_string)
                .ok_or_else(|| ViewgenError::MissingTemplate {
                    name: file_name.to_string(),
                }),
            TemplateSource::Dir(dir) => {
                let path = dir.join(file_name);
                std::fs::read_to_string(&path).map_err(|source| ViewgenError::io(path, source))
            }
        }
    }
}

/// Values shared by every file generated in one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Base name of the directory files are generated into
    pub project_name: String,
    pub date: NaiveDate,
}

impl RunContext {
    pub fn new(project_name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            project_name: project_name.into(),
            date,
        }
    }

    /// Project name taken from `dir`, dated today (local time)
    pub fn for_dir(dir: &Path) -> Self {
        Self::new(project_name_from_dir(dir), Local::now().date_naive())
    }
}

/// Last path component of `dir`, or an empty string for `/`
pub fn project_name_from_dir(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Context for template variable substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    /// `{{ viewName }}`: display name of the entry
    pub view_name: String,
    /// `{{ projectName }}`
    pub project_name: String,
    /// `{{ date }}`: ISO-8601 date
    pub date: String,
    /// `{{ year }}`
    pub year: String,
    /// `{{ baseClass }}`
    pub base_class: String,
}

impl TemplateContext {
    pub fn new(view_name: &str, base_class: &str, run: &RunContext) -> Self {
        Self {
            view_name: view_name.to_string(),
            project_name: run.project_name.clone(),
            date: run.date.format("%Y-%m-%d").to_string(),
            year: run.date.year().to_string(),
            base_class: base_class.to_string(),
        }
    }

    /// Apply placeholder substitutions to template content
    pub fn apply(&self, template: &str) -> String {
        template
            .replace("{{ viewName }}", &self.view_name)
            .replace("{{ projectName }}", &self.project_name)
            .replace("{{ date }}", &self.date)
            .replace("{{ year }}", &self.year)
            .replace("{{ baseClass }}", &self.base_class)
    }
}
