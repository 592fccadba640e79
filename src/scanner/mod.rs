//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Recursive directory walking with substring ignore rules
//! - Content hashing with BLAKE3, memoized per path
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal producing a [`TreeIndex`]
//! - [`ignore`]: The substring ignore rule set
//! - [`hasher`]: BLAKE3 file hashing and the lazy [`hasher::HashCache`]
//!
//! # Example
//!
//! ```no_run
//! use treedupe::scanner::{IgnoreRules, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/data/master"), IgnoreRules::default());
//! let index = walker.scan().expect("scan failed");
//! println!("{} distinct file names", index.len());
//! ```

pub mod hasher;
pub mod ignore;
pub mod walker;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

// Re-export main types
pub use hasher::{hash_to_hex, Hash, HashCache, HashError};
pub use ignore::{IgnoreRules, DEFAULT_IGNORE_RULES};
pub use walker::Walker;

/// Result of scanning one tree: every file basename mapped to the
/// directories (within that root) that contain a file with that name.
///
/// Directory lists preserve insertion order and never contain the same
/// directory twice for a given basename. The index is built once per
/// scan and treated as immutable afterwards.
#[derive(Debug, Default)]
pub struct TreeIndex {
    dirs_per_name: HashMap<String, Vec<PathBuf>>,
}

impl TreeIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `dir` contains a file called `name`.
    ///
    /// Idempotent per (name, dir): re-inserting an already-known
    /// directory is a no-op, so re-visits cannot inflate the index.
    pub fn insert(&mut self, name: &str, dir: &Path) {
        let dirs = self.dirs_per_name.entry(name.to_string()).or_default();
        if !dirs.iter().any(|d| d == dir) {
            dirs.push(dir.to_path_buf());
        }
    }

    /// Directories containing a file called `name`, if any.
    #[must_use]
    pub fn dirs_for(&self, name: &str) -> Option<&[PathBuf]> {
        self.dirs_per_name.get(name).map(Vec::as_slice)
    }

    /// Whether any file with this basename was seen.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.dirs_per_name.contains_key(name)
    }

    /// Iterate over (basename, directories) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.dirs_per_name
            .iter()
            .map(|(name, dirs)| (name.as_str(), dirs.as_slice()))
    }

    /// Number of distinct basenames in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs_per_name.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs_per_name.is_empty()
    }
}

/// Errors that can occur during directory scanning.
///
/// Only [`ScanError::NotFound`] on the root itself is expected in
/// normal operation; traversal errors below the root are rare and
/// treated as fatal by the caller.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The root path does not resolve to an existing filesystem entry.
    #[error("the path \"{0}\" does not exist")]
    NotFound(PathBuf),

    /// Permission was denied while traversing a directory.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred during traversal.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_index_insert_and_lookup() {
        let mut index = TreeIndex::new();
        index.insert("a.txt", Path::new("/root/x"));
        index.insert("a.txt", Path::new("/root/y"));
        index.insert("b.txt", Path::new("/root/x"));

        assert_eq!(index.len(), 2);
        assert!(index.contains("a.txt"));
        assert!(!index.contains("c.txt"));
        assert_eq!(
            index.dirs_for("a.txt").unwrap(),
            &[PathBuf::from("/root/x"), PathBuf::from("/root/y")]
        );
    }

    #[test]
    fn test_tree_index_insert_is_idempotent() {
        let mut index = TreeIndex::new();
        index.insert("a.txt", Path::new("/root/x"));
        index.insert("a.txt", Path::new("/root/x"));
        index.insert("a.txt", Path::new("/root/x"));

        assert_eq!(index.dirs_for("a.txt").unwrap().len(), 1);
    }

    #[test]
    fn test_tree_index_empty() {
        let index = TreeIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.dirs_for("anything").is_none());
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "the path \"/missing\" does not exist");

        let err = ScanError::PermissionDenied(PathBuf::from("/secret"));
        assert_eq!(err.to_string(), "permission denied: /secret");
    }
}
