//! Entry resolution and script composition

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{BundleError, BundleResult};

/// Extensions tried, in order, when the entry path has none that matches
const ENTRY_EXTENSIONS: &[&str] = &["js", "mjs"];

/// Find the entry module on disk
///
/// The path is tried as given, then with each known extension appended, so
/// `./bootstrap` finds `./bootstrap.js`.
pub fn resolve_entry(entry: &Path) -> BundleResult<PathBuf> {
    if entry.is_file() {
        return Ok(entry.to_path_buf());
    }

    ENTRY_EXTENSIONS
        .iter()
        .map(|ext| {
            let mut candidate = OsString::from(entry.as_os_str());
            candidate.push(".");
            candidate.push(ext);
            PathBuf::from(candidate)
        })
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| BundleError::MissingEntry {
            path: entry.to_path_buf(),
        })
}

/// Build the emitted script: the backend's loader followed by the entry
///
/// The `no-modules` loader defines a global `wasm_bindgen`, so the entry can
/// call it directly once both are in one classic script.
pub fn compose_script(loader: &[u8], entry: &[u8]) -> Vec<u8> {
    let mut script = Vec::with_capacity(loader.len() + entry.len() + 1);
    script.extend_from_slice(loader);
    if !loader.is_empty() && !loader.ends_with(b"\n") {
        script.push(b'\n');
    }
    script.extend_from_slice(entry);
    script
}
