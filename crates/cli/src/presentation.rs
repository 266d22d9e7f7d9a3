// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use jpgtidy_engine::report::{RenameOp, RunResult};
use std::io::Write;
use std::path::Path;

/// Writes one listed path. Used while the listing is still running, so a
/// failure here stops the run before anything is renamed.
///
/// # Errors
///
/// Fails if `out` cannot be written.
pub fn write_path<W: Write>(out: &mut W, path: &Path) -> std::io::Result<()> {
    writeln!(out, "{}", path.display())
}

/// Writes whatever the format still owes once both passes are done.
///
/// Plain output has already streamed the listing, so only planned renames
/// are left. JSON writes the whole result.
///
/// # Errors
///
/// Fails if `out` cannot be written or the result cannot be serialized.
pub fn write_result<W: Write>(out: &mut W, result: &RunResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for op in result.planned() {
                write_plan_line(out, op)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_plan_line<W: Write>(out: &mut W, op: &RenameOp) -> Result<()> {
    writeln!(out, "{} -> {}", op.from.display(), op.to.display())?;
    Ok(())
}
