use std::sync::Arc;

use crate::application::SnapshotStore;
use crate::domain::{DomainError, Snapshot};

pub struct ListSnapshotsUseCase {
    snapshot_store: Arc<dyn SnapshotStore>,
}

impl ListSnapshotsUseCase {
    pub fn new(snapshot_store: Arc<dyn SnapshotStore>) -> Self {
        Self { snapshot_store }
    }

    pub async fn execute(&self) -> Result<Vec<Snapshot>, DomainError> {
        self.snapshot_store.list().await
    }
}
