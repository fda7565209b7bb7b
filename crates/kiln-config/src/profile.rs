//! Build profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Named build mode, selected once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    /// Fast iteration: inline styles, generous image inlining, dev server.
    #[default]
    Development,
    /// Extracted styles, minimizers, code splitting.
    Production,
}

impl BuildProfile {
    pub const ALL: [BuildProfile; 2] = [BuildProfile::Development, BuildProfile::Production];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildProfile::Development => "development",
            BuildProfile::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildProfile::Production)
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildProfile {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildProfile::Development),
            "production" | "prod" => Ok(BuildProfile::Production),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

/// Source map flavour handed to the engine as `devtool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceMapMode {
    #[serde(rename = "cheap-module-source-map")]
    CheapModule,
    #[serde(rename = "source-map")]
    Full,
}

impl SourceMapMode {
    pub fn for_profile(profile: BuildProfile) -> Self {
        match profile {
            BuildProfile::Development => SourceMapMode::CheapModule,
            BuildProfile::Production => SourceMapMode::Full,
        }
    }
}
