//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{BuildMode, ConfigWarning};
use crate::error::{BundleError, BundleResult};

use super::types::Config;

/// File name looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "yewpack.toml";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path or `yewpack.toml` in the project root
    Project(PathBuf),
    /// `<config dir>/yewpack/config.toml`
    User(PathBuf),
    /// No file found
    Defaults,
}

/// Result of configuration discovery
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BundleResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| BundleError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BundleError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let (section, leaf) = match key.rsplit_once('.') {
                Some((section, leaf)) => (Some(section), leaf),
                None => (None, key.as_str()),
            };
            ConfigWarning {
                line: find_line_number(&content, section, leaf),
                suggestion: suggest_key(section, leaf),
                file: path.to_path_buf(),
                key: key.clone(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the configuration for `project_root`
///
/// Order: explicit path, project file, user file, built-in defaults. The
/// first file found wins; environment overrides are applied on top.
pub fn discover(project_root: &Path, explicit: Option<&Path>) -> BundleResult<LoadedConfig> {
    let (config, source, warnings) = if let Some(path) = explicit {
        let path = project_root.join(path);
        let (config, warnings) = load_with_warnings(&path)?;
        (config, ConfigSource::Project(path), warnings)
    } else {
        let project_config = project_root.join(PROJECT_CONFIG_FILE);
        if project_config.is_file() {
            let (config, warnings) = load_with_warnings(&project_config)?;
            (config, ConfigSource::Project(project_config), warnings)
        } else {
            match user_config_path().filter(|p| p.is_file()) {
                Some(user_config) => {
                    let (config, warnings) = load_with_warnings(&user_config)?;
                    (config, ConfigSource::User(user_config), warnings)
                }
                None => (Config::default(), ConfigSource::Defaults, Vec::new()),
            }
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source,
        warnings,
    })
}

/// Apply environment variable overrides (YEWPACK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_overrides_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(mode) = lookup("YEWPACK_MODE") {
        match mode.parse::<BuildMode>() {
            Ok(mode) => config.mode = mode,
            Err(e) => tracing::warn!("ignoring YEWPACK_MODE: {}", e),
        }
    }

    if let Some(dir) = lookup("YEWPACK_OUT_DIR").filter(|d| !d.is_empty()) {
        config.output.dir = PathBuf::from(dir);
    }

    if let Some(port) = lookup("YEWPACK_PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) if port > 0 => config.dev_server.port = port,
            _ => tracing::warn!("ignoring YEWPACK_PORT: '{}' is not a valid port", port),
        }
    }

    // Comma-separated; an empty value clears the feature set
    if let Some(features) = lookup("YEWPACK_FEATURES") {
        config.backend.features = features
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(program) = lookup("YEWPACK_WASM_PACK").filter(|p| !p.trim().is_empty()) {
        config.backend.program = program;
    }

    config
}

/// User-level config file, honouring `YEWPACK_CONFIG_HOME`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("YEWPACK_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("yewpack").join("config.toml"))
}

/// 1-indexed line of `leaf` inside `[section]` (top level when `None`)
///
/// An unknown top-level table is reported by serde as a bare key, so a
/// `[leaf]` header also counts at top level.
fn find_line_number(content: &str, section: Option<&str>, leaf: &str) -> Option<usize> {
    let mut current: Option<&str> = None;
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if let Some(header) = line.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            let header = header.trim();
            if section.is_none() && (header == leaf || header.starts_with(&format!("{}.", leaf))) {
                return Some(i + 1);
            }
            current = Some(header);
            continue;
        }
        let is_key = line
            .strip_prefix(leaf)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if current == section && is_key {
            return Some(i + 1);
        }
    }
    None
}

/// Keys accepted in each table
fn section_keys(section: Option<&str>) -> &'static [&'static str] {
    match section {
        None => &[
            "entry",
            "mode",
            "output",
            "static_assets",
            "dev_server",
            "backend",
        ],
        Some("output") => &["dir", "script", "wasm"],
        Some("static_assets") => &["dir"],
        Some("dev_server") => &["port"],
        Some("backend") => &["program", "crate_dir", "out_name", "features"],
        Some(_) => &[],
    }
}

fn suggest_key(section: Option<&str>, unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in section_keys(section) {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
