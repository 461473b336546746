//! wasm-pack backend
//!
//! Shells out to `wasm-pack build` with the `no-modules` target, which emits
//! a self-contained loader script next to the `_bg.wasm` binary.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use crate::domain::ports::{BackendError, CompileRequest, CompiledModule, WasmBackend};
use crate::domain::value_objects::BuildMode;

/// Backend that invokes the `wasm-pack` CLI
#[derive(Debug, Clone)]
pub struct WasmPackBackend {
    program: String,
}

impl WasmPackBackend {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to the program for `request`
    pub fn args(request: &CompileRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "build".into(),
            request.crate_dir.clone().into(),
            "--target".into(),
            "no-modules".into(),
            "--out-dir".into(),
            request.out_dir.clone().into(),
            "--out-name".into(),
            request.out_name.clone().into(),
            "--no-typescript".into(),
        ];

        args.push(
            match request.mode {
                BuildMode::Production => "--release",
                BuildMode::Development => "--dev",
                BuildMode::Profiling => "--profiling",
            }
            .into(),
        );

        // Everything after `--` goes to cargo
        if !request.features.is_empty() {
            let features: Vec<&str> = request.features.iter().map(String::as_str).collect();
            args.push("--".into());
            args.push("--features".into());
            args.push(features.join(",").into());
        }

        args
    }
}

impl Default for WasmPackBackend {
    fn default() -> Self {
        Self::new("wasm-pack")
    }
}

impl WasmBackend for WasmPackBackend {
    fn name(&self) -> &str {
        &self.program
    }

    fn compile(&self, request: &CompileRequest) -> Result<CompiledModule, BackendError> {
        let args = Self::args(request);
        tracing::debug!(program = %self.program, ?args, "invoking compilation backend");

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(&request.crate_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| BackendError::Launch {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let diagnostic = if stderr.trim().is_empty() {
                stdout.trim_end().to_string()
            } else {
                stderr.trim_end().to_string()
            };
            return Err(BackendError::Failed {
                status: output.status.code(),
                diagnostic,
            });
        }

        CompiledModule {
            loader: request.expected_loader(),
            wasm: request.expected_wasm(),
            log: format!("{}{}", stdout, stderr),
        }
        .verify()
    }
}
