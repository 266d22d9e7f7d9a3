// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jpgtidy",
    version,
    about = "List the files in a directory, then rename its .jpg files to their lowercased prefix"
)]
pub struct Args {
    /// Target directory
    #[arg(value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Show the renames without performing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
