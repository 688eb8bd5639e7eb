use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::application::CloneService;
use crate::domain::DomainError;

/// Clones repositories by spawning the `git` executable.
#[derive(Default)]
pub struct GitCloneService;

impl GitCloneService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CloneService for GitCloneService {
    async fn clone(&self, url: &str, target: &Path) -> Result<(), DomainError> {
        debug!("git clone --quiet {} {}", url, target.display());

        let output = Command::new("git")
            .arg("clone")
            .arg("--quiet")
            .arg(url)
            .arg(target)
            .output()
            .await?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(DomainError::clone_failed(format!(
            "git clone of {} exited with {}: {}",
            url, output.status, stderr
        )))
    }
}
