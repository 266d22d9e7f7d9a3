//! Lists the regular files directly inside one directory.
//!
//! Entries come back in the order `read_dir` yields them. A symlink counts as
//! a regular file when its target is one.

use crate::error::{EngineError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Calls `on_file` with the absolute path of every regular file in `dir`.
///
/// Returns the number of files visited.
///
/// # Errors
///
/// Fails if `dir` cannot be read, if an entry cannot be read, if a path
/// cannot be made absolute, or if `on_file` fails. The first failure stops
/// the walk.
pub fn for_each_file<F>(dir: &Path, mut on_file: F) -> Result<usize>
where
    F: FnMut(&Path) -> std::io::Result<()>,
{
    let entries = fs::read_dir(dir).map_err(|source| EngineError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|source| EngineError::ReadEntry {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(entry.file_name());

        if !is_regular_file(&path) {
            debug!("skipping non-file entry {}", path.display());
            continue;
        }

        let abs = std::path::absolute(&path).map_err(|source| EngineError::Absolute {
            path: path.clone(),
            source,
        })?;
        on_file(&abs).map_err(|source| EngineError::Emit {
            path: abs.clone(),
            source,
        })?;
        count += 1;
    }

    debug!("listed {count} files in {}", dir.display());
    Ok(count)
}

/// Collects the absolute paths of every regular file in `dir`.
///
/// # Errors
///
/// See [`for_each_file`].
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for_each_file(dir, |p| {
        files.push(p.to_path_buf());
        Ok(())
    })?;
    Ok(files)
}

/// `true` for regular files and symlinks to them. Broken links are not files.
pub(crate) fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file())
}
