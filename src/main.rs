use clap::Parser;

mod catalog;
mod cli;
mod config;
mod error;
mod library;
mod runtime;

use cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the index lines.
    // RUST_LOG, when set, wins over the default level.
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    runtime::run(&args)
}
