//! Command-line flags. Anything given here wins over the config file and
//! the environment.

use std::path::PathBuf;

use clap::Parser;

use crate::config::CatalogSettings;

#[derive(Parser, Debug)]
#[command(name = "songlist", version)]
#[command(
    about = "Copy songs into sequential trackNNN names and write a songs.txt index",
    long_about = None
)]
pub struct Args {
    /// Directory to read songs from
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Directory that receives the trackNNN files (created if missing)
    #[arg(short, long, value_name = "DIR", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Rename files inside the source directory instead of copying elsewhere
    #[arg(long)]
    pub in_place: bool,

    /// Where to write the index (default: ./songs.txt)
    #[arg(short, long, value_name = "FILE")]
    pub index: Option<PathBuf>,

    /// Recognized extension, repeatable; replaces the configured list
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Overlay the flags that were given onto `settings`.
    pub fn apply(&self, settings: &mut CatalogSettings) {
        if let Some(source) = &self.source {
            settings.source_dir = source.clone();
        }
        if let Some(output) = &self.output {
            settings.output_dir = output.clone();
        }
        if self.in_place {
            settings.output_dir = settings.source_dir.clone();
        }
        if let Some(index) = &self.index {
            settings.index_file = index.clone();
        }
        if !self.extensions.is_empty() {
            settings.extensions = self.extensions.clone();
        }
    }
}
