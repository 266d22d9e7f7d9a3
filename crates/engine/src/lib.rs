// crates/engine/src/lib.rs
use std::path::Path;

pub mod config;
pub mod error;
pub mod lister;
pub mod renamer;
pub mod report;

use crate::config::Config;
use crate::error::Result;
use crate::report::RunResult;

/// Run both passes over `config.dir`: list its files, then rename its `.jpg` entries.
///
/// `on_file` sees each listed path as soon as it is found, before the rename
/// pass begins.
///
/// # Errors
///
/// The first failure aborts the run. A listing failure, including one
/// returned by `on_file`, means no rename is attempted.
pub fn run<F>(config: &Config, mut on_file: F) -> Result<RunResult>
where
    F: FnMut(&Path) -> std::io::Result<()>,
{
    let mut files = Vec::new();
    lister::for_each_file(&config.dir, |path| {
        on_file(path)?;
        files.push(path.to_path_buf());
        Ok(())
    })?;

    let renames = renamer::rename_all(config)?;

    Ok(RunResult { files, renames })
}
