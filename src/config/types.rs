//! Configuration type definitions

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::BuildMode;
use crate::error::{BundleError, BundleResult};

/// Output naming configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_script")]
    pub script: String,

    #[serde(default = "default_wasm")]
    pub wasm: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            script: default_script(),
            wasm: default_wasm(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_script() -> String {
    "yewchat.js".to_string()
}

fn default_wasm() -> String {
    "yewchat_bg.wasm".to_string()
}

/// Static asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticAssetsConfig {
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
        }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

/// Development server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

/// Compilation backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_crate_dir")]
    pub crate_dir: PathBuf,

    #[serde(default = "default_out_name")]
    pub out_name: String,

    #[serde(default = "default_features")]
    pub features: BTreeSet<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            crate_dir: default_crate_dir(),
            out_name: default_out_name(),
            features: default_features(),
        }
    }
}

fn default_program() -> String {
    "wasm-pack".to_string()
}

fn default_crate_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_out_name() -> String {
    "yewchat".to_string()
}

fn default_features() -> BTreeSet<String> {
    BTreeSet::from(["wee_alloc".to_string()])
}

fn default_entry() -> PathBuf {
    PathBuf::from("./bootstrap.js")
}

/// Main configuration structure, as written in `yewpack.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    #[serde(default)]
    pub mode: BuildMode,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub static_assets: StaticAssetsConfig,

    #[serde(default)]
    pub dev_server: DevServerConfig,

    #[serde(default)]
    pub backend: BackendConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            mode: BuildMode::default(),
            output: OutputConfig::default(),
            static_assets: StaticAssetsConfig::default(),
            dev_server: DevServerConfig::default(),
            backend: BackendConfig::default(),
        }
    }
}

/// Values given on the command line; `None` leaves the config untouched
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<BuildMode>,
    pub output_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub features: Option<Vec<String>>,
    pub port: Option<u16>,
}

impl Config {
    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(dir) = &overrides.output_dir {
            self.output.dir = dir.clone();
        }
        if let Some(dir) = &overrides.static_dir {
            self.static_assets.dir = dir.clone();
        }
        if let Some(features) = &overrides.features {
            self.backend.features = features.iter().cloned().collect();
        }
        if let Some(port) = overrides.port {
            self.dev_server.port = port;
        }
        self
    }

    /// Check the invariants that do not need the filesystem
    pub fn validate(&self) -> BundleResult<()> {
        if self.output.dir.as_os_str().is_empty() {
            return Err(BundleError::invalid_config(
                "output.dir",
                "output directory must not be empty",
            ));
        }
        if self.dev_server.port == 0 {
            return Err(BundleError::invalid_config(
                "dev_server.port",
                "port must be between 1 and 65535",
            ));
        }
        validate_file_name("output.script", &self.output.script)?;
        validate_file_name("output.wasm", &self.output.wasm)?;
        if self.output.script == self.output.wasm {
            return Err(BundleError::invalid_config(
                "output.wasm",
                "script and wasm filenames must differ",
            ));
        }
        validate_file_name("backend.out_name", &self.backend.out_name)?;
        if self.backend.program.trim().is_empty() {
            return Err(BundleError::invalid_config(
                "backend.program",
                "backend program must not be empty",
            ));
        }
        if let Some(feature) = self
            .backend
            .features
            .iter()
            .find(|f| f.trim().is_empty() || f.contains(char::is_whitespace))
        {
            return Err(BundleError::invalid_config(
                "backend.features",
                format!("'{}' is not a valid feature name", feature),
            ));
        }
        Ok(())
    }

    /// Validate and resolve every path against `project_root`
    pub fn resolve(&self, project_root: &Path) -> BundleResult<BuildConfig> {
        self.validate()?;

        let resolve = |p: &Path| normalize(&project_root.join(p));
        let output_dir = resolve(&self.output.dir);
        let static_dir = resolve(&self.static_assets.dir);

        if output_dir == static_dir || output_dir.starts_with(&static_dir) {
            return Err(BundleError::invalid_config(
                "output.dir",
                format!(
                    "output directory {} must not be inside the static asset directory {}",
                    output_dir.display(),
                    static_dir.display()
                ),
            ));
        }

        Ok(BuildConfig {
            project_root: normalize(project_root),
            entry: resolve(&self.entry),
            crate_dir: resolve(&self.backend.crate_dir),
            output_dir,
            static_dir,
            script_filename: self.output.script.clone(),
            wasm_filename: self.output.wasm.clone(),
            out_name: self.backend.out_name.clone(),
            port: self.dev_server.port,
            features: self.backend.features.clone(),
            mode: self.mode,
            backend_program: self.backend.program.clone(),
        })
    }
}

fn validate_file_name(field: &str, name: &str) -> BundleResult<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(BundleError::invalid_config(
            field,
            format!("'{}' must be a plain file name", name),
        )),
    }
}

/// Lexically normalize a path: drop `.` and fold `..` into its parent
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// The immutable configuration of one build invocation
///
/// All paths are absolute (or relative to the project root if the root
/// itself was relative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub project_root: PathBuf,
    pub entry: PathBuf,
    pub crate_dir: PathBuf,
    pub output_dir: PathBuf,
    pub static_dir: PathBuf,
    pub script_filename: String,
    pub wasm_filename: String,
    pub out_name: String,
    pub port: u16,
    pub features: BTreeSet<String>,
    pub mode: BuildMode,
    pub backend_program: String,
}

impl BuildConfig {
    /// Path of the crate manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.crate_dir.join("Cargo.toml")
    }

    /// Whether the `no-modules` loader will find the binary on its own
    ///
    /// The loader derives the binary URL from its own script URL by
    /// replacing `.js` with `_bg.wasm`.
    pub fn wasm_name_follows_script(&self) -> bool {
        self.script_filename
            .strip_suffix(".js")
            .map(|stem| format!("{}_bg.wasm", stem) == self.wasm_filename)
            .unwrap_or(false)
    }
}
