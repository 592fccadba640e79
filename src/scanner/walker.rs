//! Directory walker producing a [`TreeIndex`].
//!
//! # Overview
//!
//! The [`Walker`] resolves its root to canonical form, then recursively
//! enumerates every regular file beneath it with [`walkdir`], applying
//! the substring [`IgnoreRules`] to each full path. Surviving files are
//! recorded in a [`TreeIndex`] as basename -> containing directory.
//!
//! The traversal is read-only and single-threaded. Errors while reading
//! a directory are fatal: a tree that cannot be fully enumerated must
//! not be used as the basis for deletions in the other tree.
//!
//! # Example
//!
//! ```no_run
//! use treedupe::scanner::{IgnoreRules, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/data/master"), IgnoreRules::default());
//! let index = walker.scan().expect("scan failed");
//! for (name, dirs) in index.iter() {
//!     println!("{name}: {} location(s)", dirs.len());
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{IgnoreRules, ScanError, TreeIndex};

/// Recursive directory walker with substring ignore filtering.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk, as supplied by the caller
    root: PathBuf,
    /// Immutable ignore rule set
    rules: IgnoreRules,
}

impl Walker {
    /// Create a new walker for the given root.
    #[must_use]
    pub fn new(root: &Path, rules: IgnoreRules) -> Self {
        Self {
            root: root.to_path_buf(),
            rules,
        }
    }

    /// Walk the tree and build its [`TreeIndex`].
    ///
    /// The root is canonicalized first (resolving symlinks and relative
    /// segments) so that ignore checks and recorded directories are
    /// unambiguous. Fails with [`ScanError::NotFound`] if the root does
    /// not exist; any traversal error below the root is also fatal.
    pub fn scan(&self) -> Result<TreeIndex, ScanError> {
        let root = self.canonical_root()?;
        log::debug!("Scanning {}", root.display());

        let mut index = TreeIndex::new();
        let mut seen = 0usize;
        let mut ignored = 0usize;

        for entry in WalkDir::new(&root) {
            let entry = entry.map_err(walk_error)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if self.rules.is_ignored(path) {
                log::trace!("Ignoring {}", path.display());
                ignored += 1;
                continue;
            }

            // Every regular file below a directory has a name and a parent.
            let (Some(name), Some(dir)) = (path.file_name(), path.parent()) else {
                continue;
            };
            index.insert(&name.to_string_lossy(), dir);
            seen += 1;
        }

        log::debug!(
            "Scanned {}: {} file(s), {} ignored, {} distinct name(s)",
            root.display(),
            seen,
            ignored,
            index.len()
        );
        Ok(index)
    }

    /// Resolve the root to canonical absolute form.
    fn canonical_root(&self) -> Result<PathBuf, ScanError> {
        self.root.canonicalize().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound(self.root.clone()),
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(self.root.clone()),
            _ => ScanError::Io {
                path: self.root.clone(),
                source: e,
            },
        })
    }
}

/// Convert a walkdir error into a [`ScanError`].
fn walk_error(err: walkdir::Error) -> ScanError {
    let path = err
        .path()
        .map_or_else(PathBuf::new, std::borrow::ToOwned::to_owned);
    match err.io_error().map(io::Error::kind) {
        Some(io::ErrorKind::PermissionDenied) => ScanError::PermissionDenied(path),
        _ => ScanError::Io {
            path,
            source: err.into(),
        },
    }
}
