//! File System Helpers
//!
//! Writes into the output directory go through here so that every failure
//! is reported as an output write error with the offending path.

mod copy;
mod local;

pub use copy::copy_tree;
pub use local::{remove_dir_all, write_artifact};
