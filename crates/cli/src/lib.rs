// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use std::io::Write;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs one invocation against `out`.
///
/// # Errors
///
/// Returns the first engine failure, or a failure writing to `out`.
pub fn execute<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = Config::try_from(args)?;
    log::debug!("jpgtidy v{VERSION} on {}", config.dir.display());

    let stream = args.format.streams();
    let result = jpgtidy_engine::run(&config, |path| {
        if stream {
            presentation::write_path(out, path)?;
        }
        Ok(())
    })?;

    presentation::write_result(out, &result, args.format)
}
