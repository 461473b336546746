//! Error types for yewpack
//!
//! Every variant is fatal for the build invocation that raised it.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::BackendError;

/// Result type alias for yewpack operations
pub type BundleResult<T> = Result<T, BundleError>;

/// Main error type for bundle operations
#[derive(Error, Debug)]
pub enum BundleError {
    /// The compilation backend failed
    #[error("compilation failed: {0}")]
    Compilation(#[from] BackendError),

    /// Configured static asset directory does not exist
    #[error("static asset directory not found: {path}")]
    MissingAssetDirectory { path: PathBuf },

    /// A file or directory under the static asset tree could not be read
    #[error("cannot read static asset {path}: {source}")]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing into the output directory failed
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value breaks an invariant
    #[error("invalid configuration value for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Entry module not found
    #[error("entry module not found: {path}")]
    MissingEntry { path: PathBuf },

    /// Crate manifest could not be read
    #[error("cannot read crate manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// Requested feature is not declared by the crate
    #[error("feature '{feature}' is not declared in {manifest}")]
    UnknownFeature { feature: String, manifest: PathBuf },

    /// Refusing to delete a directory that contains the project
    #[error("refusing to remove {path}: it contains the project root")]
    UnsafeClean { path: PathBuf },

    /// File watcher could not be set up
    #[error("watch error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BundleError {
    pub(crate) fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<notify::Error> for BundleError {
    fn from(err: notify::Error) -> Self {
        Self::Watch(err.to_string())
    }
}
