use std::path::{Path, PathBuf};

use crate::fs::FileSystem;
use crate::models::OutcomeRecord;

/// Resolve a single path to its terminal outcome.
///
/// The existence check and the delete are not atomic; a path removed by
/// someone else in between is reported as `Failed` by the delete attempt.
pub async fn prune_path<F: FileSystem>(fs: &F, path: &Path) -> OutcomeRecord {
    if !fs.exists(path).await {
        return OutcomeRecord::not_found(path);
    }

    match fs.remove_tree(path).await {
        Ok(()) => OutcomeRecord::deleted(path),
        Err(err) => OutcomeRecord::failed(path, err.to_string()),
    }
}

/// Prune every path in order, yielding one record per input path.
///
/// Errors never escape: a failed delete becomes a `Failed` record and the
/// remaining paths are still processed. No retries, no rollback.
pub async fn prune<F: FileSystem>(fs: &F, paths: &[PathBuf]) -> Vec<OutcomeRecord> {
    let mut outcomes = Vec::with_capacity(paths.len());
    for path in paths {
        outcomes.push(prune_path(fs, path).await);
    }
    outcomes
}
