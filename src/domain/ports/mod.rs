//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod backend;

pub use backend::{BackendError, CompileRequest, CompiledModule, WasmBackend};
