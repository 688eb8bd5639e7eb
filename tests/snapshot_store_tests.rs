//! Tests for snapshot directory allocation and the capture use case.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use reposnap::{
    CloneService, DomainError, FsSnapshotStore, SnapshotStore, TakeSnapshotUseCase,
};

#[tokio::test]
async fn test_list_is_empty_when_base_dir_missing() {
    let base = TempDir::new().expect("tempdir");
    let store = FsSnapshotStore::new(base.path().join("never-created"));

    let snapshots = store.list().await.expect("list");
    assert!(snapshots.is_empty());
}

#[tokio::test]
async fn test_list_ignores_foreign_entries_and_orders_by_id() {
    let base = TempDir::new().expect("tempdir");
    std::fs::create_dir(base.path().join("snapshot-10-20240110-000000")).expect("mkdir");
    std::fs::create_dir(base.path().join("snapshot-2-20240102-000000")).expect("mkdir");
    std::fs::create_dir(base.path().join("not-a-snapshot")).expect("mkdir");
    std::fs::write(base.path().join("snapshot-3-stray.txt"), "file").expect("write");

    let store = FsSnapshotStore::new(base.path());
    let snapshots = store.list().await.expect("list");

    let ids: Vec<u64> = snapshots.iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![2, 10]);
}

#[tokio::test]
async fn test_create_starts_at_id_one() {
    let base = TempDir::new().expect("tempdir");
    let store = FsSnapshotStore::new(base.path().join("snapshots"));

    let snapshot = store.create().await.expect("create");
    assert_eq!(snapshot.id(), 1);
    assert!(snapshot.path().is_dir());
    assert!(snapshot.name().starts_with("snapshot-1-"));
}

#[tokio::test]
async fn test_create_allocates_max_id_plus_one() {
    let base = TempDir::new().expect("tempdir");
    std::fs::create_dir(base.path().join("snapshot-1-20240101-000000")).expect("mkdir");
    std::fs::create_dir(base.path().join("snapshot-7-20240107-000000")).expect("mkdir");

    let store = FsSnapshotStore::new(base.path());
    let snapshot = store.create().await.expect("create");

    assert_eq!(snapshot.id(), 8, "gaps are tolerated, id is max + 1");
}

/// Clone service that writes a marker file, failing for configured names.
struct FakeCloneService {
    fail_urls: Vec<String>,
    cloned: Mutex<Vec<String>>,
}

impl FakeCloneService {
    fn new(fail_urls: &[&str]) -> Self {
        Self {
            fail_urls: fail_urls.iter().map(|s| s.to_string()).collect(),
            cloned: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CloneService for FakeCloneService {
    async fn clone(&self, url: &str, target: &Path) -> Result<(), DomainError> {
        self.cloned.lock().unwrap().push(url.to_string());
        if self.fail_urls.iter().any(|u| u == url) {
            return Err(DomainError::clone_failed(format!("cannot reach {}", url)));
        }
        std::fs::create_dir_all(target)?;
        std::fs::write(target.join("README.md"), url)?;
        Ok(())
    }
}

#[tokio::test]
async fn test_take_snapshot_clones_every_configured_repo() {
    let base = TempDir::new().expect("tempdir");
    let store = Arc::new(FsSnapshotStore::new(base.path()));
    let clones = Arc::new(FakeCloneService::new(&[]));
    let use_case = TakeSnapshotUseCase::new(store, clones.clone());

    let mut repos = BTreeMap::new();
    repos.insert("alpha".to_string(), "https://example.com/alpha.git".to_string());
    repos.insert("beta".to_string(), "https://example.com/beta.git".to_string());

    let (snapshot, outcomes) = use_case.execute(&repos).await.expect("snapshot");

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.succeeded()));
    assert!(snapshot.path().join("alpha/README.md").is_file());
    assert!(snapshot.path().join("beta/README.md").is_file());
}

#[tokio::test]
async fn test_failed_clone_does_not_abort_remaining_clones() {
    let base = TempDir::new().expect("tempdir");
    let store = Arc::new(FsSnapshotStore::new(base.path()));
    let clones = Arc::new(FakeCloneService::new(&["https://example.com/alpha.git"]));
    let use_case = TakeSnapshotUseCase::new(store, clones.clone());

    let mut repos = BTreeMap::new();
    repos.insert("alpha".to_string(), "https://example.com/alpha.git".to_string());
    repos.insert("beta".to_string(), "https://example.com/beta.git".to_string());

    let (snapshot, outcomes) = use_case.execute(&repos).await.expect("snapshot");

    assert_eq!(clones.cloned.lock().unwrap().len(), 2, "both clones attempted");

    let alpha = outcomes.iter().find(|o| o.name() == "alpha").expect("alpha");
    assert!(!alpha.succeeded());
    assert!(alpha.error().expect("error").contains("cannot reach"));

    let beta = outcomes.iter().find(|o| o.name() == "beta").expect("beta");
    assert!(beta.succeeded());
    assert!(snapshot.path().join("beta/README.md").is_file());
}
