//! Crate manifest inspection
//!
//! Reads `Cargo.toml` to learn which feature names cargo will accept.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{BundleError, BundleResult};

/// Feature names the crate at `manifest` declares
///
/// Includes `default`, every key of `[features]`, and the implicit feature
/// of each optional dependency not hidden behind a `dep:` reference.
pub fn declared_features(manifest: &Path) -> BundleResult<BTreeSet<String>> {
    let content = std::fs::read_to_string(manifest).map_err(|e| BundleError::Manifest {
        path: manifest.to_path_buf(),
        message: e.to_string(),
    })?;
    let table: toml::Table = content.parse().map_err(|e: toml::de::Error| BundleError::Manifest {
        path: manifest.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut features: BTreeSet<String> = BTreeSet::from(["default".to_string()]);
    let mut dep_refs: BTreeSet<String> = BTreeSet::new();

    if let Some(declared) = table.get("features").and_then(toml::Value::as_table) {
        for (name, enables) in declared {
            features.insert(name.clone());
            let refs = enables.as_array().into_iter().flatten();
            for r in refs.filter_map(toml::Value::as_str) {
                if let Some(dep) = r.strip_prefix("dep:") {
                    dep_refs.insert(dep.to_string());
                }
            }
        }
    }

    let mut dependency_tables = vec![table.get("dependencies")];
    if let Some(targets) = table.get("target").and_then(toml::Value::as_table) {
        dependency_tables.extend(targets.values().map(|t| t.get("dependencies")));
    }

    for deps in dependency_tables.into_iter().flatten().filter_map(toml::Value::as_table) {
        for (name, spec) in deps {
            let optional = spec
                .get("optional")
                .and_then(toml::Value::as_bool)
                .unwrap_or(false);
            if optional && !dep_refs.contains(name) {
                features.insert(name.clone());
            }
        }
    }

    Ok(features)
}
