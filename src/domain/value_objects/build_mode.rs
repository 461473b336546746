//! Build Mode Value Object
//!
//! Selects the optimisation profile handed to the compilation backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Compilation profile
///
/// - `Production`: optimised release build (default)
/// - `Development`: fast debug build with assertions
/// - `Profiling`: optimised build that keeps debug info
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Production,
    Development,
    Profiling,
}

impl BuildMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Profiling => "profiling",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" | "release" => Ok(Self::Production),
            "development" | "dev" | "debug" => Ok(Self::Development),
            "profiling" => Ok(Self::Profiling),
            other => Err(format!(
                "unknown build mode '{}' (expected production, development or profiling)",
                other
            )),
        }
    }
}
