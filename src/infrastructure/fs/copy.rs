//! Verbatim copy of the static asset tree

use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::value_objects::ArtifactFile;
use crate::error::{BundleError, BundleResult};

use super::local::write_artifact;

/// Copy every file under `source` into `dest`, preserving relative paths
///
/// Hidden files and files matched by ignore rules are copied too. Entries
/// are visited in file-name order so repeated builds write in the same
/// sequence. Returns the copied files in visit order.
pub fn copy_tree(source: &Path, dest: &Path) -> BundleResult<Vec<ArtifactFile>> {
    let walker = WalkBuilder::new(source)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut copied = Vec::new();

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(source, e))?;
        if entry.depth() == 0 {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| BundleError::AssetRead {
                path: entry.path().to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            let target = dest.join(relative);
            std::fs::create_dir_all(&target).map_err(|e| BundleError::output_write(&target, e))?;
        } else if file_type.is_file() {
            let content = std::fs::read(entry.path()).map_err(|e| BundleError::AssetRead {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
            copied.push(write_artifact(dest, relative, &content)?);
        }
    }

    Ok(copied)
}

/// Keep the failing path and the io error kind of a walk error
fn walk_error(root: &Path, err: ignore::Error) -> BundleError {
    let path = error_path(&err).unwrap_or(root).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other(message));
    BundleError::AssetRead { path, source }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn populate(root: &Path) {
        fs::create_dir_all(root.join("css")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("index.html"), "<html></html>").unwrap();
        fs::write(root.join("css").join("app.css"), "body {}").unwrap();
        fs::write(root.join(".well-known"), "hidden").unwrap();
    }

    #[test]
    fn copies_nested_and_hidden_files() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        populate(src.path());

        let copied = copy_tree(src.path(), dest.path()).unwrap();

        let paths: Vec<&str> = copied.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, vec![".well-known", "css/app.css", "index.html"]);
        assert_eq!(
            fs::read_to_string(dest.path().join("css").join("app.css")).unwrap(),
            "body {}"
        );
        assert!(dest.path().join("empty").is_dir());
    }

    #[test]
    fn overwrites_existing_files() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join("index.html"), "fresh").unwrap();
        fs::write(dest.path().join("index.html"), "stale").unwrap();

        copy_tree(src.path(), dest.path()).unwrap();

        assert_eq!(fs::read_to_string(dest.path().join("index.html")).unwrap(), "fresh");
    }

    #[test]
    fn empty_source_copies_nothing() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();

        let copied = copy_tree(src.path(), dest.path()).unwrap();
        assert!(copied.is_empty());
    }

    #[test]
    fn gitignore_rules_do_not_filter() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join(".gitignore"), "*.map\n").unwrap();
        fs::write(src.path().join("app.js.map"), "{}").unwrap();

        copy_tree(src.path(), dest.path()).unwrap();

        assert!(dest.path().join("app.js.map").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_names_the_asset() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join("index.html"), "<html></html>").unwrap();
        std::os::unix::fs::symlink(src.path().join("missing.svg"), src.path().join("logo.svg"))
            .unwrap();

        let err = copy_tree(src.path(), dest.path()).unwrap_err();

        match err {
            BundleError::AssetRead { path, source } => {
                assert_eq!(path, src.path().join("logo.svg"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected AssetRead, got {:?}", other),
        }
    }
}
