//! Property-based tests for the scanner and comparator invariants.

use proptest::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use treedupe::dedupe::{collect_candidate_hashes, delete_matches};
use treedupe::scanner::{IgnoreRules, TreeIndex, Walker};

/// A small alphabet of legal file name fragments.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.txt"
}

proptest! {
    /// Directory lists never contain duplicates, regardless of how
    /// often the same (name, dir) pair is inserted and in what order.
    #[test]
    fn tree_index_dirs_are_unique(
        inserts in proptest::collection::vec(
            (name_strategy(), 0usize..4),
            1..50,
        )
    ) {
        let dirs = [
            PathBuf::from("/r/a"),
            PathBuf::from("/r/b"),
            PathBuf::from("/r/c"),
            PathBuf::from("/r/d"),
        ];

        let mut index = TreeIndex::new();
        for (name, dir_idx) in &inserts {
            index.insert(name, &dirs[*dir_idx]);
        }

        for (_, recorded) in index.iter() {
            let unique: HashSet<_> = recorded.iter().collect();
            prop_assert_eq!(unique.len(), recorded.len());
        }
    }

    /// Candidate hashing only ever touches shared basenames: files
    /// whose name appears in a single tree are never hashed, and files
    /// in the second tree are only deleted when a same-named,
    /// same-content file exists in the first tree.
    #[test]
    fn only_shared_basenames_are_hashed_or_deleted(
        first_files in proptest::collection::btree_map(name_strategy(), "[a-z]{0,16}", 0..8),
        second_files in proptest::collection::btree_map(name_strategy(), "[a-z]{0,16}", 0..8),
    ) {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        for (name, contents) in &first_files {
            fs::write(a.path().join(name), contents).unwrap();
        }
        for (name, contents) in &second_files {
            fs::write(b.path().join(name), contents).unwrap();
        }

        let first = scan(a.path());
        let second = scan(b.path());
        let (fc, sc) = collect_candidate_hashes(&first, &second);

        let shared: HashSet<_> = first_files
            .keys()
            .filter(|name| second_files.contains_key(*name))
            .collect();
        prop_assert_eq!(fc.len(), shared.len());
        prop_assert_eq!(sc.len(), shared.len());

        delete_matches(&first, &second, &fc, &sc);

        for (name, contents) in &second_files {
            let expect_deleted =
                first_files.get(name).is_some_and(|c| c == contents);
            prop_assert_eq!(
                !b.path().join(name).exists(),
                expect_deleted,
                "wrong outcome for {}", name
            );
            // The first tree is never modified.
            if first_files.contains_key(name) {
                prop_assert!(a.path().join(name).exists());
            }
        }
    }
}

fn scan(root: &Path) -> TreeIndex {
    Walker::new(root, IgnoreRules::default()).scan().unwrap()
}
