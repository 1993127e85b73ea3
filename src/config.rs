//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive a catalog run (directories,
//! index file, recognized extensions) and helpers to load them from disk and
//! the environment.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;

#[cfg(test)]
pub(crate) mod tests;
