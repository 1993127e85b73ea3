use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// Copy `src` to `dst`, keeping permissions and access/modification times.
pub fn copy_preserving(src: &Path, dst: &Path) -> io::Result<u64> {
    let meta = fs::metadata(src)?;
    let bytes = fs::copy(src, dst)?;

    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }

    // Destination may be read-only after fs::copy.
    let file = File::options()
        .write(true)
        .open(dst)
        .or_else(|_| File::open(dst))?;
    file.set_times(times)?;

    Ok(bytes)
}

/// Copy `src` into `output_dir` under `name` unless that name is already taken.
///
/// Returns `true` when a copy was made.
pub fn copy_if_absent(src: &Path, output_dir: &Path, name: &str) -> Result<bool> {
    let dst = output_dir.join(name);
    if dst.exists() {
        log::debug!("copy skipped, {} already present", dst.display());
        return Ok(false);
    }

    copy_preserving(src, &dst).map_err(|source| CatalogError::Copy {
        from: src.to_path_buf(),
        to: dst.clone(),
        source,
    })?;
    log::debug!("copied {} -> {}", src.display(), dst.display());
    Ok(true)
}

/// Rename `output_dir/from` to `output_dir/to` unless `to` already exists.
///
/// Returns `true` when the rename happened.
pub fn rename_if_absent(output_dir: &Path, from: &str, to: &str) -> Result<bool> {
    let from = output_dir.join(from);
    let to = output_dir.join(to);
    if to.exists() {
        log::debug!("rename skipped, {} already present", to.display());
        return Ok(false);
    }

    fs::rename(&from, &to).map_err(|source| CatalogError::Rename {
        from: from.clone(),
        to: to.clone(),
        source,
    })?;
    log::debug!("renamed {} -> {}", from.display(), to.display());
    Ok(true)
}
