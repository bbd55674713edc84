use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PruneStatus {
    Deleted,
    NotFound,
    Failed,
}

/// Terminal result for one pruned path. `detail` is present exactly when
/// the status is `Failed`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutcomeRecord {
    pub path: PathBuf,
    pub status: PruneStatus,
    pub detail: Option<String>,
}

impl OutcomeRecord {
    pub fn deleted(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            status: PruneStatus::Deleted,
            detail: None,
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            status: PruneStatus::NotFound,
            detail: None,
        }
    }

    pub fn failed(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: PruneStatus::Failed,
            detail: Some(detail.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == PruneStatus::Failed
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
