//! Helpers shared by the commands.

use std::path::{Path, PathBuf};

use kiln_config::{
    BuildConfig, BuildProfile, HostEnvironment, ProfileResolver, ProjectSettings, SettingsDiscovery,
};

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| CliError::Custom(format!("Failed to get cwd: {e}")))
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Project root from `--cwd`, defaulting to the current directory.
pub fn project_root(args: &ProjectArgs) -> Result<PathBuf> {
    let cwd = get_cwd()?;
    let root = match &args.cwd {
        Some(dir) => resolve_path(dir, &cwd),
        None => cwd,
    };
    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "--cwd {} is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

/// Everything a command needs to resolve a configuration.
pub struct Project {
    pub root: PathBuf,
    pub profile: BuildProfile,
    pub env: HostEnvironment,
    pub settings: ProjectSettings,
}

impl Project {
    /// Locate the root and load its settings.
    pub fn load(args: &ProjectArgs) -> Result<Self> {
        let root = project_root(args)?;
        let mut discovery = SettingsDiscovery::new(&root);
        if let Some(file) = &args.config {
            discovery = discovery.with_file(resolve_path(file, &get_cwd()?));
        }
        if let Some(path) = discovery.find() {
            tracing::debug!(path = %path.display(), "using settings file");
        }
        let settings = discovery.load()?;

        Ok(Self {
            env: HostEnvironment::detect_in(&root),
            root,
            profile: args.profile.into(),
            settings,
        })
    }

    pub fn resolver(&self) -> ProfileResolver<'_, HostEnvironment> {
        ProfileResolver::new(&self.env).with_settings(self.settings.clone())
    }

    /// Resolve without filesystem checks.
    pub fn resolve(&self) -> BuildConfig {
        self.resolver().resolve(self.profile)
    }

    /// Resolve and require the entry and template to exist.
    pub fn resolve_checked(&self) -> Result<BuildConfig> {
        Ok(self.resolver().resolve_checked(self.profile)?)
    }

    /// Path of a user-supplied file, relative to the project root.
    pub fn path(&self, path: &Path) -> PathBuf {
        resolve_path(path, &self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Profile;
    use std::fs;
    use tempfile::TempDir;

    fn args(root: &Path) -> ProjectArgs {
        ProjectArgs {
            profile: Profile::Production,
            cwd: Some(root.to_path_buf()),
            config: None,
        }
    }

    #[test]
    fn test_resolve_path_relative() {
        let base = Path::new("/project");
        assert_eq!(
            resolve_path(Path::new("src/main.js"), base),
            PathBuf::from("/project/src/main.js")
        );
    }

    #[test]
    fn test_resolve_path_absolute() {
        let base = Path::new("/project");
        assert_eq!(
            resolve_path(Path::new("/other/main.js"), base),
            PathBuf::from("/other/main.js")
        );
    }

    #[test]
    fn test_project_root_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = args(&dir.path().join("missing"));
        assert!(matches!(
            project_root(&missing),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_project_load_reads_settings() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("kiln.toml"), "output_dir = \"build\"\n").unwrap();

        let project = Project::load(&args(dir.path())).unwrap();
        assert_eq!(project.profile, BuildProfile::Production);
        let config = project.resolve();
        assert_eq!(config.output.path, Some(dir.path().join("build")));
    }
}
