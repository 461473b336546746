//! Compilation Backends
//!
//! Concrete implementations of the WasmBackend port.

mod wasm_pack;

pub use wasm_pack::WasmPackBackend;
