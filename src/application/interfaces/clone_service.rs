use std::path::Path;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Populates a directory with a working copy of a remote repository.
#[async_trait]
pub trait CloneService: Send + Sync {
    /// Clone `url` into `target`. A failed clone returns `CloneFailed`
    /// carrying the underlying tool's diagnostics.
    async fn clone(&self, url: &str, target: &Path) -> Result<(), DomainError>;
}
