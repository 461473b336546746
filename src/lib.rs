//! yewpack - build glue for WebAssembly front-ends
//!
//! yewpack compiles a Rust crate to WebAssembly with `wasm-pack`, copies a
//! static asset directory next to it and emits a deployable `dist/` folder
//! containing a loader script and the wasm binary under stable names.
//!
//! The pipeline is deliberately flat: validate, compile, then copy, then
//! emit. See [`application::BundleUseCase`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod server;

// Re-exports for convenience
pub use application::{clean_output, run, BuildArtifacts, BundleUseCase, WatchEvent, WatchUseCase};
pub use config::{BuildConfig, Config, Overrides};
pub use domain::ports::{BackendError, CompileRequest, CompiledModule, WasmBackend};
pub use domain::value_objects::{ArtifactFile, BuildMode, ContentHash};
pub use error::{BundleError, BundleResult};
pub use infrastructure::WasmPackBackend;
