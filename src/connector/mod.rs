//! # Connector Layer
//!
//! External integrations implementing the application interfaces:
//! - Snapshot storage (timestamped directories on the local filesystem)
//! - Cloning (the `git` executable)
//! - Progress/diff rendering (console)
//! - Repository configuration (JSON file)

pub mod adapter;
pub mod config;

pub use adapter::*;
pub use config::*;
