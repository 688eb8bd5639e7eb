mod console_reporter;
mod fs_snapshot_store;
mod git_clone;

pub use console_reporter::*;
pub use fs_snapshot_store::*;
pub use git_clone::*;
