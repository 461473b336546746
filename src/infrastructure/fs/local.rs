//! Local file writes
//!
//! Artifacts are written with the tempfile + rename pattern so a reader never
//! observes a half-written file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::value_objects::ArtifactFile;
use crate::error::{BundleError, BundleResult};

/// Write `content` to `output_dir/relative` atomically
///
/// Parent directories are created as needed and an existing file is
/// replaced.
pub fn write_artifact(
    output_dir: &Path,
    relative: &Path,
    content: &[u8],
) -> BundleResult<ArtifactFile> {
    let target = output_dir.join(relative);
    let parent = target.parent().unwrap_or(output_dir);

    std::fs::create_dir_all(parent).map_err(|e| BundleError::output_write(parent, e))?;

    let mut tmp =
        NamedTempFile::new_in(parent).map_err(|e| BundleError::output_write(&target, e))?;
    tmp.write_all(content)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| BundleError::output_write(&target, e))?;
    tmp.persist(&target)
        .map_err(|e| BundleError::output_write(&target, e.error))?;

    Ok(ArtifactFile::new(relative, content))
}

/// Remove a directory tree; a missing directory is not an error
pub fn remove_dir_all(path: &Path) -> BundleResult<bool> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BundleError::output_write(path, e)),
    }
}
