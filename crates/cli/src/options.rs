use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One absolute path per line, streamed while listing
    #[default]
    Plain,
    /// A single JSON document once both passes are done
    Json,
}

impl OutputFormat {
    /// Whether listed paths are printed as they are found.
    #[must_use]
    pub const fn streams(self) -> bool {
        matches!(self, Self::Plain)
    }
}
