use std::collections::BTreeMap;
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::application::{CloneService, SnapshotStore};
use crate::domain::{DomainError, Snapshot};

/// Result of cloning one configured repository into a snapshot.
#[derive(Debug, Clone)]
pub struct CloneOutcome {
    name: String,
    url: String,
    error: Option<String>,
}

impl CloneOutcome {
    fn success(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            error: None,
        }
    }

    fn failure(name: &str, url: &str, error: String) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            error: Some(error),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Captures a new snapshot: allocates the next snapshot directory, then
/// clones every configured repository into it, one at a time.
///
/// A failed clone is recorded and logged but never aborts the remaining
/// clones; the snapshot is returned together with the per-repository
/// outcomes so callers can surface partial failures.
pub struct TakeSnapshotUseCase {
    snapshot_store: Arc<dyn SnapshotStore>,
    clone_service: Arc<dyn CloneService>,
}

impl TakeSnapshotUseCase {
    pub fn new(snapshot_store: Arc<dyn SnapshotStore>, clone_service: Arc<dyn CloneService>) -> Self {
        Self {
            snapshot_store,
            clone_service,
        }
    }

    pub async fn execute(
        &self,
        repos: &BTreeMap<String, String>,
    ) -> Result<(Snapshot, Vec<CloneOutcome>), DomainError> {
        let snapshot = self.snapshot_store.create().await?;
        info!(
            "Cloning {} repositories into {}",
            repos.len(),
            snapshot.name()
        );

        let progress_bar = ProgressBar::new(repos.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );

        let mut outcomes = Vec::with_capacity(repos.len());
        for (name, url) in repos {
            progress_bar.set_message(name.clone());
            let target = snapshot.path().join(name);

            match CloneService::clone(self.clone_service.as_ref(), url, &target).await {
                Ok(()) => {
                    debug!("Cloned {} from {}", name, url);
                    outcomes.push(CloneOutcome::success(name, url));
                }
                Err(e) => {
                    warn!("Failed to clone {}: {}", name, e);
                    outcomes.push(CloneOutcome::failure(name, url, e.to_string()));
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        Ok((snapshot, outcomes))
    }
}
