use std::io::ErrorKind;
use std::path::Path;

use sha2::{Digest, Sha256};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::domain::DomainError;

const HASH_CHUNK_SIZE: usize = 8192;

/// Outcome of fingerprinting one file.
///
/// `Unreadable` marks a permission-denied read; callers must skip the file
/// pair rather than treat it as matching or differing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOutcome {
    /// Lowercase hex SHA-256 of the file's bytes.
    Digest(String),
    Unreadable,
}

impl HashOutcome {
    pub fn digest(&self) -> Option<&str> {
        match self {
            HashOutcome::Digest(hex) => Some(hex),
            HashOutcome::Unreadable => None,
        }
    }
}

/// Streams the file through SHA-256 in fixed-size chunks.
///
/// Permission-denied on open or read maps to `Ok(HashOutcome::Unreadable)`;
/// any other I/O failure aborts the comparison run.
pub async fn hash_file(path: &Path) -> Result<HashOutcome, DomainError> {
    let mut file = match File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => return Ok(HashOutcome::Unreadable),
        Err(e) => return Err(e.into()),
    };

    let mut hasher = Sha256::new();
    let mut buf = [0u8; HASH_CHUNK_SIZE];
    loop {
        match file.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Ok(HashOutcome::Unreadable)
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(HashOutcome::Digest(format!("{:x}", hasher.finalize())))
}
