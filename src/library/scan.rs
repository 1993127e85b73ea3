use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{CatalogError, Result};

use super::model::SourceEntry;

/// Exact, case-sensitive suffix match of `.<ext>` against any of `extensions`.
///
/// `extensions` are expected without the leading dot.
pub fn is_recognized(file_name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| {
        file_name
            .strip_suffix(ext.as_str())
            .is_some_and(|rest| rest.ends_with('.'))
    })
}

/// List the recognized files directly inside `dir`, in the order the
/// filesystem returns them.
///
/// Subdirectories are not descended into and never count as tracks, even when
/// their name carries an audio extension. Names that are not valid UTF-8 are
/// skipped.
pub fn scan(dir: &Path, extensions: &[String]) -> Result<Vec<SourceEntry>> {
    if dir.exists() && !dir.is_dir() {
        return Err(CatalogError::SourceAccess {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let mut entries: Vec<SourceEntry> = Vec::new();

    // No sort_by: listing order is processing order.
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| CatalogError::SourceAccess {
            path: dir.to_path_buf(),
            source: source.into(),
        })?;

        let Some(file_name) = entry.file_name().to_str() else {
            log::warn!("skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };

        if !is_recognized(file_name, extensions) {
            continue;
        }

        if !entry.path().is_file() {
            log::debug!("skipping {}: not a regular file", entry.path().display());
            continue;
        }

        entries.push(SourceEntry {
            path: entry.path().to_path_buf(),
            file_name: file_name.to_string(),
        });
    }

    Ok(entries)
}
