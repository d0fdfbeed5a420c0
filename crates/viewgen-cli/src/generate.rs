//! Schema-driven generation: create missing files, then print declarations

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use viewgen_core::{
    Config, MaterializeSummary, Materializer, Mode, ParsedSchema, RunContext, TemplateSource,
    ViewgenError, emit, schema,
};

/// Options for the generate command
pub struct GenerateOptions {
    pub schema: PathBuf,
    pub prefix: String,
    pub mode: Mode,
    pub config: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub write_files: bool,
}

/// Run the generate command
pub fn run(options: GenerateOptions) -> Result<()> {
    let config = load_config(options.config.as_deref())?;

    let parsed = schema::parse_file(&options.schema, &options.prefix, options.mode, &config.naming)
        .with_context(|| format!("Failed to read schema: {}", options.schema.display()))?;

    report_duplicates(&parsed);

    if options.write_files {
        let output_dir = match options.output_dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        // Resolve "." and relative paths so the project name is a real directory name
        let output_dir = output_dir
            .canonicalize()
            .with_context(|| format!("Output directory not found: {}", output_dir.display()))?;

        let templates = match options.template_dir {
            Some(dir) => TemplateSource::Dir(dir),
            None => TemplateSource::Builtin,
        };

        let run = RunContext::for_dir(&output_dir);
        let materializer = Materializer::new(&config, templates, output_dir, run);
        let outcomes = materializer
            .materialize(parsed.entries())
            .map_err(explain_failure)?;

        let summary = MaterializeSummary::from_outcomes(&outcomes);
        info!(
            created = summary.created,
            skipped = summary.skipped,
            drifted = summary.drifted,
            "materialization finished"
        );
    }

    println!();
    print!("{}", emit::render_report(&parsed));

    Ok(())
}

/// Load the configuration file if one was given, defaults otherwise
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Precondition failures point at the naming configuration, not the disk
fn explain_failure(err: ViewgenError) -> anyhow::Error {
    if err.is_precondition() {
        anyhow::Error::new(err)
            .context("Schema produced a name the existing-file check cannot handle")
    } else {
        err.into()
    }
}

fn report_duplicates(parsed: &ParsedSchema) {
    for name in parsed.duplicate_constants() {
        warn!("Constant {name} is declared more than once");
    }
}
