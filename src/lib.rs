pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    CloneOutcome, CloneService, CompareReporter, CompareSnapshotsUseCase, ListSnapshotsUseCase,
    NullReporter, SnapshotStore, TakeSnapshotUseCase,
};

pub use connector::{load_repo_config, ConsoleReporter, FsSnapshotStore, GitCloneService};

pub use domain::{
    hash_file, render_line_diff, ComparisonReport, DomainError, HashOutcome, RepoChanges,
    Snapshot, REPO_DELETED, SNAPSHOT_PREFIX, VCS_METADATA_DIR,
};
