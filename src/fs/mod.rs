mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Whether anything (file, directory, or symlink) exists at `path`.
    async fn exists(&self, path: &Path) -> bool;

    /// Recursively remove the directory tree rooted at `path`.
    async fn remove_tree(&self, path: &Path) -> Result<()>;
}
