//! Bundle Module
//!
//! The build pipeline: validate, compile, copy static assets, emit the
//! script and the wasm binary.
//!
//! ## Structure
//!
//! - `result` - Result types (`BuildArtifacts`)
//! - `script` - Entry resolution and script composition
//! - `use_case` - Core use case logic (`BundleUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use yewpack::application::bundle::BundleUseCase;
//! use yewpack::infrastructure::WasmPackBackend;
//!
//! let use_case = BundleUseCase::new(WasmPackBackend::default());
//! let artifacts = use_case.run(&build_config)?;
//! ```

mod result;
mod script;
mod use_case;

pub use result::BuildArtifacts;
pub use script::{compose_script, resolve_entry};
pub use use_case::{run, BundleUseCase};
