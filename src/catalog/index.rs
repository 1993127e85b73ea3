use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};
use crate::library::TrackRecord;

/// Buffered writer for the `songs.txt` index.
///
/// The file is truncated on creation. Whatever was written is flushed when the
/// writer is dropped, so an aborted run still leaves the lines produced so far.
pub struct IndexWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl IndexWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| CatalogError::IndexFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
        })
    }

    pub fn write_record(&mut self, record: &TrackRecord) -> Result<()> {
        self.out
            .write_all(record.index_line().as_bytes())
            .map_err(|source| self.error(source))
    }

    /// Flush and close the index.
    pub fn finish(mut self) -> Result<()> {
        self.out.flush().map_err(|source| self.error(source))
    }

    fn error(&self, source: std::io::Error) -> CatalogError {
        CatalogError::IndexFile {
            path: self.path.clone(),
            source,
        }
    }
}
