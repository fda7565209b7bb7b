//! File-based settings discovery.
//!
//! Settings are layered with figment: built-in defaults, then `kiln.toml`
//! from the project root (or an explicit file), then `KILN_*` environment
//! variables. Nested keys use a double underscore, e.g. `KILN_DEV__PORT`.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::error::{ConfigError, Result};
use crate::settings::ProjectSettings;

pub const SETTINGS_FILE: &str = "kiln.toml";
pub const ENV_PREFIX: &str = "KILN_";

/// Locates and loads [`ProjectSettings`] for a project root.
///
/// # Example
///
/// ```no_run
/// use kiln_config::SettingsDiscovery;
///
/// let settings = SettingsDiscovery::new(".").load().unwrap();
/// assert_eq!(settings.entry.to_str(), Some("src/main.js"));
/// ```
pub struct SettingsDiscovery {
    root: PathBuf,
    file: Option<PathBuf>,
}

impl SettingsDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file: None,
        }
    }

    /// Use an explicit settings file instead of `<root>/kiln.toml`.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Settings file that will be read, if any.
    pub fn find(&self) -> Option<PathBuf> {
        if let Some(file) = &self.file {
            return Some(ProjectSettings::resolve(&self.root, file));
        }
        let default = self.root.join(SETTINGS_FILE);
        default.is_file().then_some(default)
    }

    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(ProjectSettings::default()));

        if let Some(path) = self.find() {
            if !path.is_file() {
                return Err(ConfigError::SettingsNotFound(path));
            }
            tracing::debug!(path = %path.display(), "reading settings file");
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    pub fn load(&self) -> Result<ProjectSettings> {
        let settings: ProjectSettings = self.figment()?.extract()?;
        settings.check()?;
        Ok(settings)
    }
}
