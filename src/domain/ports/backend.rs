//! WasmBackend port - abstraction over the WebAssembly compiler
//!
//! The orchestrator only knows "given a crate and a feature set, produce a
//! binary and a loader or fail with a diagnostic".

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::BuildMode;

/// Errors reported by a compilation backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend program could not be started
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend ran and reported failure
    #[error("backend exited with status {}:\n{diagnostic}", display_status(.status))]
    Failed {
        status: Option<i32>,
        diagnostic: String,
    },

    /// The backend succeeded but an expected output is missing
    #[error("backend reported success but did not produce {path}")]
    MissingOutput { path: PathBuf },
}

fn display_status(status: &Option<i32>) -> String {
    status.map_or_else(|| "signal".to_string(), |code| code.to_string())
}

/// Everything a backend needs for one compilation
#[derive(Debug, Clone)]
pub struct CompileRequest {
    /// Root of the crate to compile
    pub crate_dir: PathBuf,
    /// Directory the backend writes into
    pub out_dir: PathBuf,
    /// Stem of the produced files (`<out_name>.js`, `<out_name>_bg.wasm`)
    pub out_name: String,
    /// Cargo features passed through to the compiler
    pub features: BTreeSet<String>,
    pub mode: BuildMode,
}

impl CompileRequest {
    /// Path the backend is expected to write the loader module to
    pub fn expected_loader(&self) -> PathBuf {
        self.out_dir.join(format!("{}.js", self.out_name))
    }

    /// Path the backend is expected to write the wasm binary to
    pub fn expected_wasm(&self) -> PathBuf {
        self.out_dir.join(format!("{}_bg.wasm", self.out_name))
    }
}

/// Outputs of a successful compilation, still inside the staging directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledModule {
    pub loader: PathBuf,
    pub wasm: PathBuf,
    /// Captured backend output, kept for verbose logging
    pub log: String,
}

impl CompiledModule {
    /// Check that both outputs exist on disk
    pub fn verify(self) -> Result<Self, BackendError> {
        for path in [&self.loader, &self.wasm] {
            if !Path::new(path).is_file() {
                return Err(BackendError::MissingOutput { path: path.clone() });
            }
        }
        Ok(self)
    }
}

/// A WebAssembly compilation backend
///
/// Implementations:
/// - `WasmPackBackend` - shells out to `wasm-pack`
/// - test doubles that write canned outputs
pub trait WasmBackend {
    /// Human-readable backend name used in logs
    fn name(&self) -> &str;

    /// Compile the crate described by `request` into `request.out_dir`
    fn compile(&self, request: &CompileRequest) -> Result<CompiledModule, BackendError>;
}

impl<T: WasmBackend + ?Sized> WasmBackend for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compile(&self, request: &CompileRequest) -> Result<CompiledModule, BackendError> {
        (**self).compile(request)
    }
}
