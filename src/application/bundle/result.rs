//! Bundle Result
//!
//! Result types for a build.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{ArtifactFile, BuildMode};

/// What a successful build wrote into the output directory
#[derive(Debug, Clone, Serialize)]
pub struct BuildArtifacts {
    pub output_dir: PathBuf,
    pub mode: BuildMode,
    /// Generated loader module
    pub script: ArtifactFile,
    /// Compiled WebAssembly binary
    pub wasm: ArtifactFile,
    /// Static assets, in copy order
    pub assets: Vec<ArtifactFile>,
}

impl BuildArtifacts {
    /// Every file written, script and wasm last
    pub fn files(&self) -> impl Iterator<Item = &ArtifactFile> {
        self.assets
            .iter()
            .chain(std::iter::once(&self.script))
            .chain(std::iter::once(&self.wasm))
    }

    pub fn total_bytes(&self) -> u64 {
        self.files().map(|f| f.size).sum()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
