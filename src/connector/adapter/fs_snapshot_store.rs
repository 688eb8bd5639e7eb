use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Local;

use crate::application::SnapshotStore;
use crate::domain::{DomainError, Snapshot};

/// Snapshot directories under a single base directory on the local filesystem.
pub struct FsSnapshotStore {
    base_dir: PathBuf,
}

impl FsSnapshotStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl SnapshotStore for FsSnapshotStore {
    async fn list(&self) -> Result<Vec<Snapshot>, DomainError> {
        let mut dir = match tokio::fs::read_dir(&self.base_dir).await {
            Ok(dir) => dir,
            // A base directory that was never created simply has no snapshots.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut snapshots = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(snapshot) = Snapshot::parse(&name, &self.base_dir) {
                snapshots.push(snapshot);
            }
        }

        snapshots.sort_by_key(Snapshot::id);
        Ok(snapshots)
    }

    async fn create(&self) -> Result<Snapshot, DomainError> {
        tokio::fs::create_dir_all(&self.base_dir).await?;

        let next_id = self.list().await?.last().map(|s| s.id() + 1).unwrap_or(1);
        let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
        let snapshot = Snapshot::new(next_id, &timestamp, &self.base_dir);

        tokio::fs::create_dir(snapshot.path()).await?;
        Ok(snapshot)
    }

    async fn resolve(&self, name: &str) -> Result<PathBuf, DomainError> {
        let path = self.base_dir.join(name);
        if !path.is_dir() {
            return Err(DomainError::not_found(format!(
                "Snapshot '{}' does not exist under {}",
                name,
                self.base_dir.display()
            )));
        }
        Ok(path)
    }
}
