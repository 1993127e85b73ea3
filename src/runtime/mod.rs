use std::io;

use anyhow::Context;

use crate::catalog;
use crate::cli::Args;

mod settings;

pub fn run(args: &Args) -> anyhow::Result<()> {
    let settings = settings::resolve_settings(args)?;

    if args.print_config {
        print!("{}", toml::to_string_pretty(&settings)?);
        return Ok(());
    }

    let cfg = &settings.catalog;
    log::debug!(
        "source={} output={} index={} extensions={:?}",
        cfg.source_dir.display(),
        cfg.output_dir.display(),
        cfg.index_file.display(),
        cfg.extensions
    );

    let mut stdout = io::stdout().lock();
    catalog::run(cfg, &mut stdout)
        .with_context(|| format!("cataloging {}", cfg.source_dir.display()))?;

    Ok(())
}
