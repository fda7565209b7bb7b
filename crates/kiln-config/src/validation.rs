//! Pluggable config validation strategies
//!
//! Separates structural checks from checks that need the filesystem.

use std::path::Path;

use crate::config::BuildConfig;
use crate::error::{ConfigError, PathRole, Result};
use crate::plugins::BuildPlugin;
use crate::profile::BuildProfile;
use crate::rules::RuleAction;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{BuildProfile, ConfigValidator, ProfileResolver, SchemaValidator, StaticEnvironment};
///
/// let env = StaticEnvironment::new(Some(4), "/project");
/// let config = ProfileResolver::new(&env).resolve(BuildProfile::Production);
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.entry.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "entry".to_string(),
                hint: Some("entry path cannot be empty".to_string()),
            });
        }

        if config.rules().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "no file-type rules".to_string(),
                hint: None,
            });
        }

        for (field, template) in [
            ("output.filename", &config.output.filename),
            ("output.chunkFilename", &config.output.chunk_filename),
        ] {
            if !template.is_cache_busting()? {
                return Err(ConfigError::InvalidTemplate {
                    field: field.to_string(),
                    template: template.to_string(),
                    hint: "needs both [name] and [contenthash]".to_string(),
                });
            }
        }

        for rule in config.rules().rules() {
            if let RuleAction::Asset(policy) = &rule.action {
                crate::output::FilenameTemplate::new(policy.filename()).tokens()?;
            }
        }

        if config.mode == BuildProfile::Production && config.output.path.is_none() {
            return Err(ConfigError::SchemaValidation {
                message: "production builds need an output path".to_string(),
                hint: Some("set `output_dir` in kiln.toml".to_string()),
            });
        }

        if let Some(dev) = &config.dev_server {
            if dev.port == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "dev.port".to_string(),
                    hint: Some("use a port between 1 and 65535".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator
///
/// Runs the structural checks, then requires the entry module and the HTML
/// template to exist under the root.
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        let entry = self.root.join(&config.entry);
        if !entry.is_file() {
            return Err(ConfigError::UnresolvedPath {
                role: PathRole::Entry,
                path: entry,
            });
        }

        for plugin in &config.plugins {
            if let BuildPlugin::Html { template } = plugin {
                let path = self.root.join(template);
                if !path.is_file() {
                    return Err(ConfigError::UnresolvedPath {
                        role: PathRole::Template,
                        path,
                    });
                }
            }
        }

        Ok(())
    }
}

pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
