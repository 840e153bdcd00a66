//! File-backed persistence for the catalog, the projection and the job
//! postings. All three stores are plain JSON arrays, pretty-printed, UTF-8
//! with non-ASCII preserved, overwritten whole on every save.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use super::{Category, JobPosting, ProjectedCategory};

/// Load the full catalog. Absence or malformed content is an error here;
/// each caller decides whether that is fatal for its run.
pub fn load_catalog(path: &Path) -> Result<Vec<Category>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("catalog file {} is not a valid catalog", path.display()))
}

/// Overwrite the catalog file with the given list, which may be empty.
pub fn save_catalog(path: &Path, categories: &[Category]) -> Result<()> {
    write_pretty(path, categories)
}

/// Overwrite the projection file with the full derived list.
pub fn save_projection(path: &Path, projected: &[ProjectedCategory]) -> Result<()> {
    write_pretty(path, projected)
}

/// Load prior job postings. A missing file means nothing has been posted
/// yet; an unreadable file is logged and treated the same way, so posting
/// keeps working even over a corrupted store.
pub fn load_postings(path: &Path) -> Vec<JobPosting> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Vec::new(),
    };
    match serde_json::from_str(&raw) {
        Ok(postings) => postings,
        Err(e) => {
            warn!(
                "postings file {} is unreadable ({e}); starting from an empty list",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Append one posting and rewrite the whole array.
pub fn append_posting(path: &Path, posting: JobPosting) -> Result<()> {
    let mut postings = load_postings(path);
    postings.push(posting);
    write_pretty(path, &postings)
}

fn write_pretty<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(value).context("failed to serialize records to JSON")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
