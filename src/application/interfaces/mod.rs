mod clone_service;
mod compare_reporter;
mod snapshot_store;

pub use clone_service::*;
pub use compare_reporter::*;
pub use snapshot_store::*;
