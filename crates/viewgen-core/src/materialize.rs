//! Template materialization
//!
//! For every entry and every configured extension, a file is created from
//! the matching template unless a file for that entry already exists under
//! either naming convention. Existing files are never overwritten: the check
//! goes through [`crate::resolve`], and the write itself uses create-new
//! semantics so a file appearing in between is also left alone.

use crate::config::Config;
use crate::entry::Entry;
use crate::error::{ViewgenError, ViewgenResult};
use crate::resolve;
use crate::template::{RunContext, TemplateContext, TemplateSource};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What happened to one (entry, extension) target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// A new file was written
    Created { path: PathBuf },
    /// A file already existed; `found` differs from `expected` when it uses
    /// the other naming convention
    Skipped { expected: PathBuf, found: PathBuf },
}

impl FileOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, FileOutcome::Created { .. })
    }

    /// True when the existing file uses a different naming convention than
    /// the one the schema asked for
    pub fn is_drift(&self) -> bool {
        matches!(self, FileOutcome::Skipped { expected, found } if expected != found)
    }
}

/// Created/skipped counts for reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeSummary {
    pub created: usize,
    pub skipped: usize,
    pub drifted: usize,
}

impl MaterializeSummary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        outcomes
            .iter()
            .fold(Self::default(), |mut summary, outcome| {
                if outcome.is_created() {
                    summary.created += 1;
                } else {
                    summary.skipped += 1;
                    if outcome.is_drift() {
                        summary.drifted += 1;
                    }
                }
                summary
            })
    }
}

/// Writes boilerplate files for parsed entries
pub struct Materializer<'a> {
    config: &'a Config,
    templates: TemplateSource,
    output_dir: PathBuf,
    run: RunContext,
}

impl<'a> Materializer<'a> {
    pub fn new(
        config: &'a Config,
        templates: TemplateSource,
        output_dir: impl Into<PathBuf>,
        run: RunContext,
    ) -> Self {
        Self {
            config,
            templates,
            output_dir: output_dir.into(),
            run,
        }
    }

    /// Materialize all files for `entries`, in order
    pub fn materialize<'e>(
        &self,
        entries: impl IntoIterator<Item = &'e Entry>,
    ) -> ViewgenResult<Vec<FileOutcome>> {
        let mut outcomes = Vec::new();
        for entry in entries {
            outcomes.extend(self.materialize_entry(entry)?);
        }
        Ok(outcomes)
    }

    /// Materialize one file per configured extension for a single entry
    pub fn materialize_entry(&self, entry: &Entry) -> ViewgenResult<Vec<FileOutcome>> {
        let policy = &self.config.templates;
        let base_class = policy.base_class(entry.kind, &entry.canonical_name);
        let ctx = TemplateContext::new(&entry.display_name, base_class, &self.run);

        let mut outcomes = Vec::with_capacity(policy.extensions.len());

        for ext in &policy.extensions {
            let expected = self
                .output_dir
                .join(format!("{}.{}", entry.display_name, ext));

            let existing = resolve::resolve(
                &self.output_dir,
                &entry.display_name,
                &format!(".{ext}"),
                &self.config.naming.suffixes,
            )?;

            if let Some(found) = existing {
                outcomes.push(skipped(expected, found));
                continue;
            }

            let template = self
                .templates
                .load(&policy.template_file(entry.kind, ext))?;
            info!("Writing {}", expected.display());

            if write_new(&template, &expected, &ctx)? {
                outcomes.push(FileOutcome::Created { path: expected });
            } else {
                outcomes.push(skipped(expected.clone(), expected));
            }
        }

        Ok(outcomes)
    }
}

fn skipped(expected: PathBuf, found: PathBuf) -> FileOutcome {
    if expected != found {
        warn!(
            "Skipping {} because of {}",
            expected.display(),
            found.display()
        );
    } else {
        warn!("Skipping {}", expected.display());
    }
    FileOutcome::Skipped { expected, found }
}

/// Substitute `template` into a new file at `output`.
///
/// Returns `Ok(false)` without touching anything when `output` already exists.
fn write_new(template: &str, output: &Path, ctx: &TemplateContext) -> ViewgenResult<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(output) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(source) => return Err(ViewgenError::io(output, source)),
    };

    file.write_all(ctx.apply(template).as_bytes())
        .map_err(|source| ViewgenError::io(output, source))?;

    Ok(true)
}
