use std::path::Path;

use crate::application::CompareReporter;

/// Renders comparison progress to stdout.
#[derive(Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl CompareReporter for ConsoleReporter {
    fn repo_deleted(&self, name: &str) {
        println!("{}: Repo deleted", name);
    }

    fn repo_changes(&self, name: &str, changes: &[String]) {
        println!("Changes in {}:", name);
        for change in changes {
            println!("  {}", change);
        }
    }

    fn repo_unchanged(&self, name: &str) {
        println!("{} has no changes.", name);
    }

    fn file_diff(&self, path: &Path, diff: &str) {
        println!("Detailed diff for {}:", path.display());
        println!("{}", diff);
    }
}
