//! Project settings read from `kiln.toml` and the environment.

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dev::DevServer;
use crate::error::{ConfigError, Result};
use crate::profile::BuildProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectSettings {
    /// Entry module, relative to the project root.
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// HTML template the page is generated from.
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Directory holding first-party sources.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Production output directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Worker count to use instead of the detected CPU count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_jobs: Option<usize>,

    #[serde(default)]
    pub dev: DevServer,

    #[serde(default)]
    pub assets: AssetSettings,
}

/// Image inlining threshold overrides, in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AssetSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development_inline_limit: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_inline_limit: Option<u64>,
}

impl AssetSettings {
    pub fn inline_limit(&self, profile: BuildProfile) -> Option<u64> {
        match profile {
            BuildProfile::Development => self.development_inline_limit,
            BuildProfile::Production => self.production_inline_limit,
        }
    }
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            template: default_template(),
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            parallel_jobs: None,
            dev: DevServer::default(),
            assets: AssetSettings::default(),
        }
    }
}

impl ProjectSettings {
    /// JSON Schema describing `kiln.toml`.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(ProjectSettings);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Reject values no profile can work with.
    pub fn check(&self) -> Result<()> {
        if self.parallel_jobs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "parallel_jobs".to_string(),
                hint: Some("must be at least 1; omit it to use the CPU count".to_string()),
            });
        }
        if self.entry.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "entry".to_string(),
                hint: Some("entry path cannot be empty".to_string()),
            });
        }
        for (field, limit) in [
            ("assets.development_inline_limit", self.assets.development_inline_limit),
            ("assets.production_inline_limit", self.assets.production_inline_limit),
        ] {
            if limit == Some(0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    hint: Some("a zero limit never inlines; use 1 or more".to_string()),
                });
            }
        }
        Ok(())
    }

    /// Resolve a settings path against the project root.
    pub fn resolve(root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}

fn default_entry() -> PathBuf {
    PathBuf::from("src/main.js")
}

fn default_template() -> PathBuf {
    PathBuf::from("public/index.html")
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}
