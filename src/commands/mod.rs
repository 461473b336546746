//! Command handlers
//!
//! Every handler loads the configuration through [`Context`], runs one use
//! case and renders the outcome to stdout (JSON with `--json`).

pub mod build;
pub mod clean;
pub mod config;
pub mod serve;
pub mod watch;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use yewpack::config::{discover, LoadedConfig};
use yewpack::{BuildConfig, Overrides};

/// Invocation-wide settings shared by all commands
#[derive(Debug)]
pub struct Context {
    pub json: bool,
    pub project_root: PathBuf,
    pub config_path: Option<PathBuf>,
}

impl Context {
    pub fn new(json: bool, config_path: Option<PathBuf>) -> Result<Self> {
        let project_root =
            std::env::current_dir().context("cannot determine the current directory")?;
        Ok(Self {
            json,
            project_root,
            config_path,
        })
    }

    /// Discover the configuration file and report its warnings
    pub fn load(&self) -> Result<LoadedConfig> {
        let loaded = discover(&self.project_root, self.config_path.as_deref())?;
        for warning in &loaded.warnings {
            eprintln!("Warning: {}", warning);
        }
        Ok(loaded)
    }

    /// Configuration for one build, with command-line overrides applied
    pub fn build_config(&self, overrides: &Overrides) -> Result<BuildConfig> {
        let loaded = self.load()?;
        let config = loaded.config.with_overrides(overrides);
        Ok(config.resolve(&self.project_root)?)
    }
}

/// Human-readable byte count
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
