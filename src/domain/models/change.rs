use std::collections::BTreeMap;
use std::path::Path;

use serde::{Serialize, Serializer};

/// Marker recorded for a sub-repository that vanished between snapshots.
pub const REPO_DELETED: &str = "Repo deleted";

/// Detected changes for one sub-repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoChanges {
    /// The sub-repository exists in snapshot A but not in snapshot B.
    Deleted,
    /// Ordered change descriptions: deletions and content changes in A's
    /// traversal order, then additions in B's traversal order.
    Files(Vec<String>),
}

impl Serialize for RepoChanges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RepoChanges::Deleted => serializer.serialize_str(REPO_DELETED),
            RepoChanges::Files(changes) => changes.serialize(serializer),
        }
    }
}

/// Mapping from sub-repository name to its detected changes.
///
/// Sub-repositories with zero differences are absent; a deleted
/// sub-repository is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComparisonReport {
    repos: BTreeMap<String, RepoChanges>,
}

impl ComparisonReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, changes: RepoChanges) {
        self.repos.insert(name, changes);
    }

    pub fn get(&self, name: &str) -> Option<&RepoChanges> {
        self.repos.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.repos.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RepoChanges)> {
        self.repos.iter()
    }
}

pub fn file_deleted_description(path_a: &Path, repo_b: &Path) -> String {
    format!("{} - File deleted in {}", path_a.display(), repo_b.display())
}

pub fn file_changed_description(path_a: &Path) -> String {
    format!("{} - File content changed", path_a.display())
}

pub fn file_added_description(path_b: &Path, repo_b: &Path) -> String {
    format!("{} - New file in {}", path_b.display(), repo_b.display())
}
