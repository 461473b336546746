//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `backend/` - Compilation backends (wasm-pack)
//! - `fs/` - Output directory writes and the static asset copy
//! - `manifest` - Cargo manifest inspection

pub mod backend;
pub mod fs;
pub mod manifest;

// Re-export for convenience
pub use backend::WasmPackBackend;
pub use fs::{copy_tree, remove_dir_all, write_artifact};
pub use manifest::declared_features;
