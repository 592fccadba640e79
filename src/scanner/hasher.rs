//! BLAKE3 file hashing with per-path memoization.
//!
//! # Overview
//!
//! Candidate files are confirmed as duplicates by a 256-bit BLAKE3
//! content digest. Each file is read fully into memory, hashed, and
//! closed within a single call; digests are memoized in a [`HashCache`]
//! so a path referenced from several candidate pairs is read at most
//! once per run.
//!
//! Read failures are a skip condition, not an error: a file that cannot
//! be hashed never enters the cache and therefore can never match or be
//! deleted.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A 256-bit BLAKE3 content digest.
pub type Hash = [u8; 32];

/// Render a hash as lowercase hex, for logs.
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

/// Errors that can occur while hashing a candidate file.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The file disappeared between scan and hash.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Hash a file's full contents.
///
/// Reads the whole file into memory and digests it in one pass. The
/// handle is closed before this function returns.
pub fn hash_file(path: &Path) -> Result<Hash, HashError> {
    let contents = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    Ok(*blake3::hash(&contents).as_bytes())
}

/// Lazy per-run digest cache keyed by full path.
///
/// Invariant: every key in the cache was readable at insertion time;
/// unreadable paths are skipped (logged at debug) and never inserted.
/// One cache exists per tree and is discarded at the end of the run.
#[derive(Debug, Default)]
pub struct HashCache {
    hashes: HashMap<PathBuf, Hash>,
    skipped: usize,
}

impl HashCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the digest for `path`, computing and caching it on first use.
    ///
    /// Returns `None` when the file cannot be read; the failure is
    /// logged and the path stays out of the cache.
    pub fn get_or_compute(&mut self, path: &Path) -> Option<Hash> {
        if let Some(hash) = self.hashes.get(path) {
            return Some(*hash);
        }
        match hash_file(path) {
            Ok(hash) => {
                log::trace!("{} {}", hash_to_hex(&hash), path.display());
                self.hashes.insert(path.to_path_buf(), hash);
                Some(hash)
            }
            Err(e) => {
                log::debug!("Skipping unreadable candidate: {e}");
                self.skipped += 1;
                None
            }
        }
    }

    /// The cached digest for `path`, if it was computed earlier.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<Hash> {
        self.hashes.get(path).copied()
    }

    /// Number of cached digests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Number of candidates skipped due to read failures.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_hash_file_matches_blake3() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("f.txt");
        fs::write(&path, b"hello").unwrap();

        let hash = hash_file(&path).unwrap();
        assert_eq!(hash, *blake3::hash(b"hello").as_bytes());
    }

    #[test]
    fn test_hash_file_missing() {
        let dir = tempdir().unwrap();
        let err = hash_file(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, HashError::NotFound(_)));
    }

    #[test]
    fn test_identical_content_same_digest() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"same bytes").unwrap();
        fs::write(&b, b"same bytes").unwrap();

        assert_eq!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    }

    #[test]
    fn test_cache_computes_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("f.txt");
        fs::write(&path, b"cached").unwrap();

        let mut cache = HashCache::new();
        let first = cache.get_or_compute(&path).unwrap();

        // Remove the backing file: a second lookup must come from the cache.
        fs::remove_file(&path).unwrap();
        let second = cache.get_or_compute(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_unreadable_path_never_inserted() {
        let dir = tempdir().unwrap();
        let mut cache = HashCache::new();

        assert!(cache.get_or_compute(&dir.path().join("ghost")).is_none());
        assert!(cache.is_empty());
        assert_eq!(cache.skipped(), 1);
    }

    #[test]
    fn test_hash_to_hex() {
        let mut hash: Hash = [0; 32];
        hash[0] = 0xab;
        hash[31] = 0x01;
        let hex = hash_to_hex(&hash);
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("ab"));
        assert!(hex.ends_with("01"));
    }
}
