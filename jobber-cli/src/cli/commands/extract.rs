//! Extract command handler: project the catalog to names only.

use std::fs;

use anyhow::{Context, Result};

use crate::catalog::{self, LooseCategory, store};
use crate::config::Config;

/// Single-pass transform of the catalog file into the projection file.
/// Unlike the scraper there is no error recovery here: a missing or
/// malformed catalog aborts the run.
pub fn handle_extract_command(config: &Config) -> Result<()> {
    let path = config.catalog_path();
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let categories: Vec<LooseCategory> = serde_json::from_str(&raw)
        .with_context(|| format!("catalog file {} is not valid JSON", path.display()))?;

    let projected = catalog::project(categories);

    let out = config.projection_path();
    store::save_projection(&out, &projected)?;
    println!(
        "Extracted {} categories to {}",
        projected.len(),
        out.display()
    );
    Ok(())
}
