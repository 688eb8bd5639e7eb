mod compare_snapshots;
mod list_snapshots;
mod take_snapshot;

pub use compare_snapshots::*;
pub use list_snapshots::*;
pub use take_snapshot::*;
