//! Clean use case implementation

use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::{BundleError, BundleResult};
use crate::infrastructure::remove_dir_all;

use super::result::CleanResult;

/// Remove the configured output directory
///
/// Refuses when the output directory is the project root or one of its
/// ancestors, which a stray `output.dir = ".."` would otherwise wipe.
pub fn clean_output(config: &BuildConfig) -> BundleResult<CleanResult> {
    let output_dir = &config.output_dir;

    if contains(output_dir, &config.project_root) || contains(output_dir, &config.crate_dir) {
        return Err(BundleError::UnsafeClean {
            path: output_dir.clone(),
        });
    }

    let removed = remove_dir_all(output_dir)?;
    if removed {
        tracing::info!(path = %output_dir.display(), "removed output directory");
    } else {
        tracing::debug!(path = %output_dir.display(), "output directory already absent");
    }

    Ok(CleanResult {
        path: output_dir.clone(),
        removed,
    })
}

/// Whether `dir` is `path` or one of its ancestors, following symlinks when
/// both exist
fn contains(dir: &Path, path: &Path) -> bool {
    let canonical = |p: &Path| p.canonicalize().unwrap_or_else(|_| PathBuf::from(p));
    path.starts_with(dir) || canonical(path).starts_with(canonical(dir))
}
