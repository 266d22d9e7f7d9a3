use crate::error::EngineError;
use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_EXTENSION: &str = "jpg";
pub const DEFAULT_SEPARATOR: char = '_';

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(error = "EngineError"))]
pub struct Config {
    /// Directory whose immediate entries are listed and renamed.
    pub dir: PathBuf,
    /// Extension (without the dot) selecting the entries to rename. Case-sensitive.
    #[builder(default = "DEFAULT_EXTENSION.to_string()")]
    pub extension: String,
    /// The prefix of a renamed file ends before the first occurrence of this.
    #[builder(default = "DEFAULT_SEPARATOR")]
    pub separator: char,
    #[builder(default)]
    pub dry_run: bool,
}

impl Config {
    /// Config for `dir` with every other field at its default.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            separator: DEFAULT_SEPARATOR,
            dry_run: false,
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for EngineError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        Self::Config(e.to_string())
    }
}
