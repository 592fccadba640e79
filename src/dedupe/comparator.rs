//! Comparator: basename join, candidate hashing, and the deletion pass.
//!
//! # Overview
//!
//! A second-tree file is a duplicate when a first-tree file has the
//! same basename AND the same content digest. The comparator therefore
//! never hashes a file whose basename appears in only one tree, and it
//! never deletes anything from the first tree.
//!
//! Hashing runs to completion for both trees before the first deletion
//! is attempted, so a partially hashed basename can never trigger a
//! premature removal.
//!
//! # Match scoping
//!
//! Digest pairing is explicitly restricted to candidates sharing a
//! basename. Both caches only ever contain shared-basename candidates,
//! so an unscoped cross-product over the caches would currently produce
//! identical deletions, but it would turn into cross-name deletions the
//! moment the caches were populated differently. The per-basename check
//! keeps correctness local to this function.

use std::path::Path;

use crate::actions::delete::delete_file;
use crate::scanner::{HashCache, TreeIndex};

/// Statistics from one comparison/deletion run.
#[derive(Debug, Clone, Default)]
pub struct DedupeStats {
    /// Basenames present in both trees.
    pub shared_basenames: usize,
    /// Digest pairs that matched.
    pub matches: usize,
    /// Files successfully deleted from the second tree.
    pub deleted: usize,
    /// Bytes freed by deletions.
    pub bytes_freed: u64,
    /// Matched paths found already gone at deletion time
    /// (a second first-tree copy matched the same file).
    pub already_gone: usize,
    /// Deletions that failed for any other reason, with messages.
    pub failures: Vec<(std::path::PathBuf, String)>,
}

impl DedupeStats {
    /// Human-readable one-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} shared name(s), {} match(es), {} file(s) deleted, {} bytes freed",
            self.shared_basenames, self.matches, self.deleted, self.bytes_freed
        )
    }
}

/// Digest every candidate file on both sides of the basename join.
///
/// For each basename present in both trees, every (directory, name)
/// path on each side is hashed into that side's [`HashCache`], lazily
/// and at most once per path. Unreadable files are skipped and stay out
/// of their cache, which excludes them from matching.
///
/// Returns the (first-tree, second-tree) caches.
#[must_use]
pub fn collect_candidate_hashes(first: &TreeIndex, second: &TreeIndex) -> (HashCache, HashCache) {
    let mut first_cache = HashCache::new();
    let mut second_cache = HashCache::new();

    for (name, first_dirs) in first.iter() {
        let Some(second_dirs) = second.dirs_for(name) else {
            continue;
        };

        for dir in first_dirs {
            first_cache.get_or_compute(&dir.join(name));
        }
        for dir in second_dirs {
            second_cache.get_or_compute(&dir.join(name));
        }
    }

    log::debug!(
        "Hashed {} first-tree and {} second-tree candidate(s), {} skipped",
        first_cache.len(),
        second_cache.len(),
        first_cache.skipped() + second_cache.skipped()
    );
    (first_cache, second_cache)
}

/// Delete second-tree files whose digest matches a same-named
/// first-tree file.
///
/// Within each shared basename, every (first path, second path) pair
/// with equal digests is a match, and deletion of the second path is
/// attempted once per match. When several first-tree copies match the
/// same second-tree file, attempts after the first find it already
/// gone; that is tolerated and counted, not escalated. Other deletion
/// failures are printed and processing continues.
pub fn delete_matches(
    first: &TreeIndex,
    second: &TreeIndex,
    first_cache: &HashCache,
    second_cache: &HashCache,
) -> DedupeStats {
    let mut stats = DedupeStats::default();

    for (name, first_dirs) in first.iter() {
        let Some(second_dirs) = second.dirs_for(name) else {
            continue;
        };
        stats.shared_basenames += 1;

        for second_dir in second_dirs {
            let second_path = second_dir.join(name);
            let Some(second_hash) = second_cache.get(&second_path) else {
                continue;
            };

            for first_dir in first_dirs {
                let first_path = first_dir.join(name);
                let Some(first_hash) = first_cache.get(&first_path) else {
                    continue;
                };

                if first_hash == second_hash {
                    stats.matches += 1;
                    attempt_delete(&second_path, &first_path, &mut stats);
                }
            }
        }
    }

    log::info!("{}", stats.summary());
    stats
}

/// Attempt one deletion and fold the outcome into `stats`.
fn attempt_delete(second_path: &Path, matched_against: &Path, stats: &mut DedupeStats) {
    match delete_file(second_path) {
        Ok(result) => {
            log::info!(
                "Deleted {} (duplicate of {})",
                result.path.display(),
                matched_against.display()
            );
            stats.deleted += 1;
            stats.bytes_freed += result.size;
        }
        Err(e) if e.is_already_gone() => {
            log::warn!("Already deleted: {}", second_path.display());
            stats.already_gone += 1;
        }
        Err(e) => {
            println!("{e}");
            log::warn!("Deletion failed: {e}");
            stats
                .failures
                .push((second_path.to_path_buf(), e.to_string()));
        }
    }
}
