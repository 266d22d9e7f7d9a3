use serde::Serialize;
use std::path::PathBuf;

/// A single rename, from one entry of the directory to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOp {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameOutcome {
    /// The entry was moved to its new name.
    Renamed,
    /// The entry already had its tidy name; nothing was touched.
    Unchanged,
    /// Dry run: the rename was computed but not applied.
    Planned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameRecord {
    #[serde(flatten)]
    pub op: RenameOp,
    pub outcome: RenameOutcome,
}

/// What one run saw and did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunResult {
    /// Absolute paths of the regular files, in directory order.
    pub files: Vec<PathBuf>,
    pub renames: Vec<RenameRecord>,
}

impl RunResult {
    pub fn renamed(&self) -> impl Iterator<Item = &RenameOp> {
        self.with_outcome(RenameOutcome::Renamed)
    }

    pub fn planned(&self) -> impl Iterator<Item = &RenameOp> {
        self.with_outcome(RenameOutcome::Planned)
    }

    fn with_outcome(&self, outcome: RenameOutcome) -> impl Iterator<Item = &RenameOp> {
        self.renames
            .iter()
            .filter(move |r| r.outcome == outcome)
            .map(|r| &r.op)
    }
}
