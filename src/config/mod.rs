//! Configuration module for yewpack
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (YEWPACK_*)
//! 3. Project config (`yewpack.toml` or `--config`)
//! 4. User config (`<config dir>/yewpack/config.toml`)
//! 5. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{discover, user_config_path, ConfigSource, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    BackendConfig, BuildConfig, Config, DevServerConfig, OutputConfig, Overrides,
    StaticAssetsConfig,
};
