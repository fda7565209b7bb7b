//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use kiln_config::ConfigError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "paths are resolved against the project root (see --cwd)",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report, attaching a help line when there is
/// an obvious fix.
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::UnresolvedPath { role, path } => miette::miette!(
            help = "create the file, point `entry`/`template` at it in kiln.toml, or pass --skip-checks",
            "{} path not found: {}",
            role,
            path.display()
        ),
        ConfigError::InvalidValue {
            field,
            hint: Some(hint),
        } => miette::miette!(help = hint, "Invalid config value for '{}'", field),
        ConfigError::SchemaValidation {
            message,
            hint: Some(hint),
        } => miette::miette!(help = hint, "Schema validation failed: {}", message),
        ConfigError::InvalidTemplate {
            field,
            template,
            hint,
        } => miette::miette!(help = hint, "Invalid {} template `{}`", field, template),
        ConfigError::SettingsNotFound(path) => miette::miette!(
            help = "check the --config path",
            "Settings file not found: {}",
            path.display()
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}
