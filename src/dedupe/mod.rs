//! Cross-tree duplicate detection and removal.
//!
//! The pipeline has two phases over a pair of [`TreeIndex`] values:
//!
//! 1. [`comparator::collect_candidate_hashes`]: join the trees by
//!    basename and digest every candidate on both sides.
//! 2. [`comparator::delete_matches`]: pair first-tree and second-tree
//!    digests within each shared basename and delete second-tree files
//!    on digest equality.
//!
//! [`TreeIndex`]: crate::scanner::TreeIndex

pub mod comparator;

pub use comparator::{collect_candidate_hashes, delete_matches, DedupeStats};
