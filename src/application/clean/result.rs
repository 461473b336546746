//! Clean result types

use std::path::PathBuf;

use serde::Serialize;

/// Result of a clean operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanResult {
    /// Directory that was targeted
    pub path: PathBuf,
    /// False when the directory did not exist
    pub removed: bool,
}
