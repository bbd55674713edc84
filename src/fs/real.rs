use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling symlink still counts as present
        // and gets a delete attempt rather than a "not found" report.
        tokio::fs::symlink_metadata(path).await.is_ok()
    }

    async fn remove_tree(&self, path: &Path) -> Result<()> {
        tokio::fs::remove_dir_all(path).await?;
        Ok(())
    }
}
