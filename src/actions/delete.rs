//! Permanent file deletion.
//!
//! # Overview
//!
//! Deletion here is unconditional and permanent: no trash, no
//! confirmation, no backup. Callers decide what to delete; this module
//! only reports what happened precisely enough for the caller to
//! continue past per-file failures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (commonly: already deleted by an earlier match).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    /// The path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::Io { path: p, .. } => p,
        }
    }

    /// Whether this failure means the file is already gone.
    #[must_use]
    pub fn is_already_gone(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result of a successful deletion.
#[derive(Debug, Clone)]
pub struct DeleteResult {
    /// Path that was deleted.
    pub path: PathBuf,
    /// Size of the deleted file in bytes.
    pub size: u64,
}

/// Permanently delete a single file.
///
/// The size is captured before removal so callers can account for
/// bytes freed.
pub fn delete_file(path: &Path) -> Result<DeleteResult, DeleteError> {
    let to_error = |e: io::Error| match e.kind() {
        io::ErrorKind::NotFound => DeleteError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => DeleteError::PermissionDenied(path.to_path_buf()),
        _ => DeleteError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    };

    let size = fs::metadata(path).map_err(to_error)?.len();
    fs::remove_file(path).map_err(to_error)?;

    log::debug!("Deleted {} ({size} bytes)", path.display());
    Ok(DeleteResult {
        path: path.to_path_buf(),
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_delete_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doomed.txt");
        fs::write(&path, b"12345").unwrap();

        let result = delete_file(&path).unwrap();
        assert_eq!(result.size, 5);
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ghost.txt");

        let err = delete_file(&path).unwrap_err();
        assert!(err.is_already_gone());
        assert_eq!(err.path(), path);
    }

    #[test]
    fn test_delete_twice_reports_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("once.txt");
        fs::write(&path, b"x").unwrap();

        delete_file(&path).unwrap();
        let err = delete_file(&path).unwrap_err();
        assert!(matches!(err, DeleteError::NotFound(_)));
    }
}
