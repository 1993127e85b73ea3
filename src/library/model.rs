use std::path::PathBuf;

/// A recognized audio file found at the top level of the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub path: PathBuf,
    pub file_name: String,
}

impl SourceEntry {
    /// Substring after the final `.` of the file name.
    pub fn extension(&self) -> &str {
        extension_of(&self.file_name)
    }
}

/// One line of the index: the generated track name and the name it replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub index: usize,
    pub track_name: String,
    pub original_name: String,
}

impl TrackRecord {
    pub fn new(index: usize, entry: &SourceEntry) -> Self {
        Self {
            index,
            track_name: track_name(index, entry.extension()),
            original_name: entry.file_name.clone(),
        }
    }

    /// The exact text written to the index file and the report, newline included.
    pub fn index_line(&self) -> String {
        format!("{}, {}\n", self.track_name, self.original_name)
    }
}

/// `track` + index zero-padded to three digits + `.` + extension.
///
/// Indices past 999 simply widen (`track1000.mp3`).
pub fn track_name(index: usize, ext: &str) -> String {
    format!("track{index:03}.{ext}")
}

pub(crate) fn extension_of(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or(file_name)
}
