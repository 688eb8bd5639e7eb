use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{DomainError, Snapshot};

/// Enumeration and allocation of snapshot directories under a base directory.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// All snapshots following the naming convention, ordered by id.
    async fn list(&self) -> Result<Vec<Snapshot>, DomainError>;

    /// Allocate the next sequential snapshot directory and create it.
    async fn create(&self) -> Result<Snapshot, DomainError>;

    /// Resolve a snapshot name to its directory; `NotFound` if it does not exist.
    async fn resolve(&self, name: &str) -> Result<PathBuf, DomainError>;
}
