use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Node {
    Deletable,
    Undeletable(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    nodes: HashMap<PathBuf, Node>,
    removals: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_present(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.nodes.insert(path.into(), Node::Deletable);
    }

    pub fn set_undeletable(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .nodes
            .insert(path.into(), Node::Undeletable(message.into()));
    }

    /// Every path `remove_tree` has been called with, in call order.
    pub fn removals(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.removals.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.nodes.contains_key(path)
    }

    async fn remove_tree(&self, path: &Path) -> Result<()> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.removals.push(path.to_path_buf());

        match inner.nodes.get(path).cloned() {
            // A successful delete leaves the path absent, so a second prune
            // over the same list observes NotFound.
            Some(Node::Deletable) => {
                inner.nodes.remove(path);
                Ok(())
            }
            Some(Node::Undeletable(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock node for {}", path.display())),
        }
    }
}
