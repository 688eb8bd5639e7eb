use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::application::{CompareReporter, NullReporter, SnapshotStore};
use crate::domain::{
    file_added_description, file_changed_description, file_deleted_description, hash_file,
    render_line_diff, ComparisonReport, DomainError, RepoChanges, VCS_METADATA_DIR,
};

/// Compares two snapshots sub-repository by sub-repository.
///
/// Each sub-repository is classified with a single merged pass over both
/// trees' file listings: deletions and content changes in snapshot A's
/// traversal order, then additions in snapshot B's traversal order. Hashing
/// only happens for paths present on both sides; additions are an
/// existence-only check.
pub struct CompareSnapshotsUseCase {
    snapshot_store: Arc<dyn SnapshotStore>,
    reporter: Arc<dyn CompareReporter>,
}

impl CompareSnapshotsUseCase {
    pub fn new(snapshot_store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            snapshot_store,
            reporter: Arc::new(NullReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn CompareReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Compare `snapshot_a` against `snapshot_b`, optionally restricted to one
    /// named sub-repository. Under `verbose`, a line diff of every changed
    /// file is surfaced through the reporter (never stored in the report).
    pub async fn execute(
        &self,
        snapshot_a: &str,
        snapshot_b: &str,
        verbose: bool,
        repo_filter: Option<&str>,
    ) -> Result<ComparisonReport, DomainError> {
        let root_a = self.snapshot_store.resolve(snapshot_a).await?;
        let root_b = self.snapshot_store.resolve(snapshot_b).await?;

        info!("Comparing snapshots {} and {}", snapshot_a, snapshot_b);

        let repo_names = match repo_filter {
            Some(name) => {
                if !root_a.join(name).is_dir() {
                    return Err(DomainError::not_found(format!(
                        "Repository '{}' does not exist in snapshot {}",
                        name, snapshot_a
                    )));
                }
                vec![name.to_string()]
            }
            None => list_subdirectories(&root_a)?,
        };

        let mut report = ComparisonReport::new();
        for name in repo_names {
            let repo_a = root_a.join(&name);
            let repo_b = root_b.join(&name);

            if !repo_b.is_dir() {
                self.reporter.repo_deleted(&name);
                report.insert(name, RepoChanges::Deleted);
                continue;
            }

            let changes = self.compare_repo(&repo_a, &repo_b, verbose).await?;
            if changes.is_empty() {
                self.reporter.repo_unchanged(&name);
            } else {
                self.reporter.repo_changes(&name, &changes);
                report.insert(name, RepoChanges::Files(changes));
            }
        }

        Ok(report)
    }

    async fn compare_repo(
        &self,
        repo_a: &Path,
        repo_b: &Path,
        verbose: bool,
    ) -> Result<Vec<String>, DomainError> {
        debug!("Comparing {} against {}", repo_a.display(), repo_b.display());

        let files_a = collect_files(repo_a)?;
        let files_b = collect_files(repo_b)?;
        let present_a: HashSet<&PathBuf> = files_a.iter().collect();
        let present_b: HashSet<&PathBuf> = files_b.iter().collect();

        let mut changes = Vec::new();

        for rel in &files_a {
            let path_a = repo_a.join(rel);
            if !present_b.contains(rel) {
                changes.push(file_deleted_description(&path_a, repo_b));
                continue;
            }

            let path_b = repo_b.join(rel);
            let outcome_a = hash_file(&path_a).await?;
            let outcome_b = hash_file(&path_b).await?;
            let (Some(digest_a), Some(digest_b)) = (outcome_a.digest(), outcome_b.digest()) else {
                // Permission-unreadable on either side: no signal, no record.
                debug!("Skipping unreadable file pair {}", rel.display());
                continue;
            };

            if digest_a != digest_b {
                changes.push(file_changed_description(&path_a));
                if verbose {
                    // Bytes can differ while the line sequences match
                    // (e.g. a trailing-newline change); no event then.
                    let diff = self.render_diff(&path_a, &path_b).await;
                    if !diff.is_empty() {
                        self.reporter.file_diff(&path_a, &diff);
                    }
                }
            }
        }

        for rel in &files_b {
            if !present_a.contains(rel) {
                changes.push(file_added_description(&repo_b.join(rel), repo_b));
            }
        }

        Ok(changes)
    }

    /// Diff production failures (unreadable file, non-UTF-8 content) degrade
    /// to an inline error string; they never abort the comparison.
    async fn render_diff(&self, path_a: &Path, path_b: &Path) -> String {
        let text_a = tokio::fs::read_to_string(path_a).await;
        let text_b = tokio::fs::read_to_string(path_b).await;
        match (text_a, text_b) {
            (Ok(a), Ok(b)) => render_line_diff(&a, &b),
            (Err(e), _) | (_, Err(e)) => format!("Error: {}", e),
        }
    }
}

/// Relative paths of every file under `root`, in sorted traversal order,
/// pruning the version-control metadata directory wherever it appears.
fn collect_files(root: &Path) -> Result<Vec<PathBuf>, DomainError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.file_name() != VCS_METADATA_DIR);

    for entry in walker {
        let entry = entry.map_err(|e| DomainError::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();
        files.push(rel);
    }

    Ok(files)
}

/// Immediate child directory names of `root`, sorted.
fn list_subdirectories(root: &Path) -> Result<Vec<String>, DomainError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();
    Ok(names)
}
