// crates/cli/src/config.rs
use crate::args::Args;
pub use jpgtidy_engine::config::{Config, ConfigBuilder};
use jpgtidy_engine::error::EngineError;

impl TryFrom<&Args> for Config {
    type Error = EngineError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .dir(args.dir.clone())
            .dry_run(args.dry_run)
            .build()
    }
}
