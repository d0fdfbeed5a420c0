//! Scan command implementation

use crate::generate::load_config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use viewgen_core::emit;

/// Print declarations for view controllers found under `root`
pub fn run(prefix: &str, root: &Path, config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config.as_deref())?;

    let parsed = viewgen_core::scan::scan(root, prefix, &config.naming)
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    print!("{}", emit::render_report(&parsed));

    Ok(())
}
