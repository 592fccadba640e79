//! Filesystem actions performed on matched duplicates.
//!
//! Currently the only action is permanent deletion; see [`delete`].

pub mod delete;

pub use delete::{delete_file, DeleteError, DeleteResult};
