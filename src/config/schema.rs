use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/songlist/config.toml` or `~/.config/songlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags (applied by the runtime after loading)
/// 2) Environment variables (prefix `SONGLIST__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Directory scanned for songs. Only its top level is read.
    pub source_dir: PathBuf,
    /// Directory that receives the `trackNNN.<ext>` files.
    /// May be the same as `source_dir`, in which case files are renamed in place.
    pub output_dir: PathBuf,
    /// Index file path; relative paths resolve against the working directory.
    pub index_file: PathBuf,
    /// Recognized extensions, without the dot. Matching is case-sensitive.
    pub extensions: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        let staging = default_staging_dir();
        Self {
            source_dir: staging.clone(),
            output_dir: staging,
            index_file: PathBuf::from("songs.txt"),
            extensions: vec!["mp3".into(), "m4a".into(), "wav".into()],
        }
    }
}

impl CatalogSettings {
    /// Extensions with surrounding whitespace and a leading dot stripped.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .collect()
    }
}

/// `~/Music/to_SD`, or a relative `Music/to_SD` when `HOME` is not set.
fn default_staging_dir() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join("Music")
        .join("to_SD")
}
