//! Source directory listing and the naming model for generated tracks.

mod model;
mod scan;

pub use model::*;
pub use scan::scan;
