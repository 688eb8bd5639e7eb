use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory prefix of every snapshot under the base directory.
pub const SNAPSHOT_PREFIX: &str = "snapshot-";

/// Version-control metadata directory, pruned from every traversal.
pub const VCS_METADATA_DIR: &str = ".git";

/// A point-in-time capture of the configured repositories.
///
/// Named `snapshot-{id}-{timestamp}`; the directory's immediate children are
/// the cloned sub-repositories. Snapshots are never mutated after capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    name: String,
    id: u64,
    path: PathBuf,
}

impl Snapshot {
    pub fn new(id: u64, timestamp: &str, base_dir: &Path) -> Self {
        let name = format!("{}{}-{}", SNAPSHOT_PREFIX, id, timestamp);
        let path = base_dir.join(&name);
        Self { name, id, path }
    }

    /// Parses a directory name of the form `snapshot-{id}-{timestamp}`.
    /// Returns `None` for names that do not follow the convention.
    pub fn parse(name: &str, base_dir: &Path) -> Option<Self> {
        let rest = name.strip_prefix(SNAPSHOT_PREFIX)?;
        let (id_str, _timestamp) = rest.split_once('-')?;
        let id = id_str.parse::<u64>().ok()?;
        Some(Self {
            name: name.to_string(),
            id,
            path: base_dir.join(name),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_conventional_name() {
        let snapshot = Snapshot::new(7, "20240101-120000", Path::new("/tmp/snaps"));

        assert_eq!(snapshot.name(), "snapshot-7-20240101-120000");
        assert_eq!(snapshot.id(), 7);
        assert_eq!(snapshot.path(), Path::new("/tmp/snaps/snapshot-7-20240101-120000"));
    }

    #[test]
    fn test_parse_round_trip() {
        let base = Path::new("/data");
        let snapshot = Snapshot::new(42, "20240615-093000", base);

        let parsed = Snapshot::parse(snapshot.name(), base).expect("should parse");
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_parse_rejects_unconventional_names() {
        let base = Path::new("/data");

        assert!(Snapshot::parse("snapshot-abc-20240101", base).is_none());
        assert!(Snapshot::parse("snapshot-12", base).is_none());
        assert!(Snapshot::parse("backup-1-20240101", base).is_none());
        assert!(Snapshot::parse("", base).is_none());
    }
}
