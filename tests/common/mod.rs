//! Common test utilities for yewpack CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus helpers to run the binary
//! - A fake `wasm-pack` that writes canned outputs (Unix only)
//! - Fixtures: reusable project content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
