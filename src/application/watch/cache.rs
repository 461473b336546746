//! Content tracking for change detection

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Remembers the last seen hash of every watched file
///
/// Editors often touch or rewrite files without changing them; only a real
/// content change (or a deletion) counts.
#[derive(Debug, Default)]
pub struct ContentTracker {
    hashes: HashMap<PathBuf, ContentHash>,
}

impl ContentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state of `path`; true if it differs from last time
    pub fn changed(&mut self, path: &Path) -> bool {
        match std::fs::read(path) {
            Ok(content) => {
                let hash = ContentHash::from_bytes(&content);
                match self.hashes.insert(path.to_path_buf(), hash.clone()) {
                    Some(previous) => previous != hash,
                    None => true,
                }
            }
            // Directories never count on their own; their files do
            Err(_) if path.is_dir() => false,
            Err(_) => self.hashes.remove(path).is_some() || !path.exists(),
        }
    }
}
