//! Loads scraped content metadata from a directory of JSON files.
//!
//! Each `*.json` file holds either a single record or an array of
//! records. Files are visited in sorted filename order so repeated runs
//! over the same directory produce the same record sequence. Malformed
//! files and records are logged and skipped; only an unreadable
//! directory is fatal.

use std::path::{Path, PathBuf};

use crate::content::ContentItem;
use crate::LoadError;

/// Load every content record found under `dir`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the directory itself cannot be read.
/// Unparsable files and records are skipped with a warning.
pub fn load_content_dir(dir: &Path) -> Result<Vec<ContentItem>, LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|e| LoadError::Io {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    // Directory iteration order is filesystem-dependent.
    paths.sort();

    let mut items = Vec::new();
    for path in paths {
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable metadata file");
                continue;
            }
        };
        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping malformed metadata file");
                continue;
            }
        };
        match value {
            serde_json::Value::Array(records) => {
                for record in records {
                    push_record(&mut items, record, &path);
                }
            }
            other => push_record(&mut items, other, &path),
        }
    }

    Ok(items)
}

fn push_record(items: &mut Vec<ContentItem>, record: serde_json::Value, path: &Path) {
    match serde_json::from_value::<ContentItem>(record) {
        Ok(item) => items.push(item),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping malformed content record");
        }
    }
}
