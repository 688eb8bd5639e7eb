//! Repository configuration: a JSON object mapping sub-repository names to
//! clone URLs. Names become directory names inside every snapshot.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::DomainError;

pub fn load_repo_config(path: &Path) -> Result<BTreeMap<String, String>, DomainError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        DomainError::invalid_input(format!("Invalid repo config {}: {}", path.display(), e))
    })
}
