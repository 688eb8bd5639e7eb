use std::path::Path;

/// Progress and diff output emitted while a comparison runs.
///
/// Events are presentation-only side effects; they never feed back into the
/// returned report. Callers choose how to render them (console, log, discard),
/// which keeps the comparison itself testable without capturing stdout.
pub trait CompareReporter: Send + Sync {
    /// The sub-repository exists in snapshot A but not in snapshot B.
    fn repo_deleted(&self, name: &str);

    /// The sub-repository has the given ordered change descriptions.
    fn repo_changes(&self, name: &str, changes: &[String]);

    /// The sub-repository has no detected changes.
    fn repo_unchanged(&self, name: &str);

    /// Line diff (or inline error text) for one content-changed file.
    fn file_diff(&self, path: &Path, diff: &str);
}

/// Discards every event. Default when no reporter is attached.
pub struct NullReporter;

impl CompareReporter for NullReporter {
    fn repo_deleted(&self, _name: &str) {}
    fn repo_changes(&self, _name: &str, _changes: &[String]) {}
    fn repo_unchanged(&self, _name: &str) {}
    fn file_diff(&self, _path: &Path, _diff: &str) {}
}
