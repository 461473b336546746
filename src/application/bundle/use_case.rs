//! Bundle Use Case
//!
//! Orchestrates one build:
//! 1. Preflight: entry module, static asset directory, feature flags
//! 2. Compile into a private staging directory
//! 3. Copy the static asset tree into the output directory
//! 4. Write the script and the wasm binary under their configured names
//!
//! Nothing touches the output directory before step 3, so a failed
//! preflight or compilation leaves it exactly as it was.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::BuildConfig;
use crate::domain::ports::{CompileRequest, WasmBackend};
use crate::error::{BundleError, BundleResult};
use crate::infrastructure::{copy_tree, declared_features, write_artifact, WasmPackBackend};

use super::result::BuildArtifacts;
use super::script::{compose_script, resolve_entry};

/// Run the pipeline with the `wasm-pack` backend named in `config`
pub fn run(config: &BuildConfig) -> BundleResult<BuildArtifacts> {
    BundleUseCase::new(WasmPackBackend::new(config.backend_program.clone())).run(config)
}

/// Bundle use case, parameterized by its compilation backend
#[derive(Debug)]
pub struct BundleUseCase<B>
where
    B: WasmBackend,
{
    backend: B,
}

impl<B> BundleUseCase<B>
where
    B: WasmBackend,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Execute the build described by `config`
    pub fn run(&self, config: &BuildConfig) -> BundleResult<BuildArtifacts> {
        let started = Instant::now();
        let entry = self.preflight(config)?;

        let staging = tempfile::Builder::new().prefix("yewpack-").tempdir()?;
        let request = CompileRequest {
            crate_dir: config.crate_dir.clone(),
            out_dir: staging.path().join("pkg"),
            out_name: config.out_name.clone(),
            features: config.features.clone(),
            mode: config.mode,
        };

        tracing::info!(
            backend = self.backend.name(),
            crate_dir = %config.crate_dir.display(),
            mode = %config.mode,
            "compiling crate"
        );
        let module = self.backend.compile(&request)?;
        if !module.log.trim().is_empty() {
            tracing::debug!("{}", module.log.trim_end());
        }

        let loader = std::fs::read(&module.loader)?;
        let wasm = std::fs::read(&module.wasm)?;
        let entry_source = std::fs::read(&entry)?;
        let script = compose_script(&loader, &entry_source);

        let output_dir = &config.output_dir;
        std::fs::create_dir_all(output_dir)
            .map_err(|e| BundleError::output_write(output_dir, e))?;

        let assets = copy_tree(&config.static_dir, output_dir)?;
        for collision in assets.iter().filter(|a| {
            a.path == config.script_filename || a.path == config.wasm_filename
        }) {
            tracing::warn!(
                "static asset '{}' is overwritten by a build artifact",
                collision.path
            );
        }

        let script = write_artifact(output_dir, Path::new(&config.script_filename), &script)?;
        let wasm = write_artifact(output_dir, Path::new(&config.wasm_filename), &wasm)?;

        tracing::info!(
            output_dir = %output_dir.display(),
            assets = assets.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "bundle written"
        );

        Ok(BuildArtifacts {
            output_dir: output_dir.clone(),
            mode: config.mode,
            script,
            wasm,
            assets,
        })
    }

    /// Every check that can fail without compiling or writing
    fn preflight(&self, config: &BuildConfig) -> BundleResult<PathBuf> {
        let entry = resolve_entry(&config.entry)?;

        if !config.static_dir.is_dir() {
            return Err(BundleError::MissingAssetDirectory {
                path: config.static_dir.clone(),
            });
        }

        if !config.features.is_empty() {
            let manifest = config.manifest_path();
            let declared = declared_features(&manifest)?;
            if let Some(unknown) = config.features.iter().find(|f| !declared.contains(*f)) {
                return Err(BundleError::UnknownFeature {
                    feature: unknown.clone(),
                    manifest,
                });
            }
        }

        if !config.wasm_name_follows_script() {
            tracing::warn!(
                "'{}' does not follow the '<script>_bg.wasm' convention; the entry must pass \
                 '{}' to wasm_bindgen() explicitly",
                config.wasm_filename,
                config.wasm_filename
            );
        }

        Ok(entry)
    }
}
