//! The catalog run: number every recognized song in the source directory,
//! record it in the index file and leave a `trackNNN.<ext>` copy in the
//! output directory.
//!
//! Everything happens sequentially in listing order. Any I/O failure aborts
//! the run; files handled before the failure stay copied/renamed and the index
//! keeps the lines written so far.

mod index;
mod transfer;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::CatalogSettings;
use crate::error::{CatalogError, Result};
use crate::library::{TrackRecord, scan};

use index::IndexWriter;
use transfer::{copy_if_absent, rename_if_absent};

/// What a run did, in addition to the records it wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub records: Vec<TrackRecord>,
    pub copied: usize,
    pub copy_skipped: usize,
    pub renamed: usize,
    pub rename_skipped: usize,
}

/// Run the catalog with `settings`, echoing every index line to `report`.
pub fn run<W: Write>(settings: &CatalogSettings, report: &mut W) -> Result<CatalogSummary> {
    let extensions = settings.normalized_extensions();
    let output_dir = settings.output_dir.as_path();

    let mut index = IndexWriter::create(&settings.index_file)?;
    ensure_output_dir(output_dir)?;
    let entries = scan(&settings.source_dir, &extensions)?;

    log::debug!(
        "{} recognized file(s) in {}",
        entries.len(),
        settings.source_dir.display()
    );

    let mut summary = CatalogSummary::default();
    for (i, entry) in entries.iter().enumerate() {
        let record = TrackRecord::new(i + 1, entry);

        index.write_record(&record)?;
        report
            .write_all(record.index_line().as_bytes())
            .map_err(CatalogError::Report)?;

        if copy_if_absent(&entry.path, output_dir, &entry.file_name)? {
            summary.copied += 1;
        } else {
            summary.copy_skipped += 1;
        }

        if rename_if_absent(output_dir, &entry.file_name, &record.track_name)? {
            summary.renamed += 1;
        } else {
            summary.rename_skipped += 1;
        }

        summary.records.push(record);
    }

    index.finish()?;
    report.flush().map_err(CatalogError::Report)?;

    log::info!(
        "cataloged {} track(s): {} copied, {} renamed, {} copies and {} renames skipped",
        summary.records.len(),
        summary.copied,
        summary.renamed,
        summary.copy_skipped,
        summary.rename_skipped
    );
    Ok(summary)
}

/// Create the output directory if it is missing. The parent must exist.
fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(CatalogError::OutputCreate {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    fs::create_dir(dir).map_err(|source| CatalogError::OutputCreate {
        path: dir.to_path_buf(),
        source,
    })?;
    log::debug!("created output directory {}", dir.display());
    Ok(())
}
