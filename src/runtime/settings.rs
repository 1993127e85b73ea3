use crate::cli::Args;
use crate::config;
use crate::error::{CatalogError, Result};

/// Load settings from file and environment, overlay the command line, then
/// validate the result. A config that fails to load or validate is an error.
pub fn resolve_settings(args: &Args) -> Result<config::Settings> {
    if let Some(path) = config::resolve_config_path() {
        log::debug!("config file: {}", path.display());
    }

    let mut settings = config::Settings::load()?;
    args.apply(&mut settings.catalog);
    settings.validate().map_err(CatalogError::Config)?;
    Ok(settings)
}
