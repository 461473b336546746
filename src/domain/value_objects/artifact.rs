//! Artifact File Value Object

use std::path::Path;

use serde::Serialize;

use super::ContentHash;

/// A file written into the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactFile {
    /// Path relative to the output directory, `/`-separated
    pub path: String,
    pub size: u64,
    pub hash: ContentHash,
}

impl ArtifactFile {
    pub fn new(relative: &Path, content: &[u8]) -> Self {
        let path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self {
            path,
            size: content.len() as u64,
            hash: ContentHash::from_bytes(content),
        }
    }
}
