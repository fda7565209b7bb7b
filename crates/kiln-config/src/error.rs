//! Error types for configuration resolution and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors
    #[error("{role} path not found: {}", .path.display())]
    UnresolvedPath { role: PathRole, path: PathBuf },

    // Structural errors
    #[error("invalid {field} template `{template}`: {hint}")]
    InvalidTemplate {
        field: String,
        template: String,
        hint: String,
    },

    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("unknown build profile `{0}` (expected `development` or `production`)")]
    UnknownProfile(String),

    // Settings loading errors
    #[error("settings file not found: {}", .0.display())]
    SettingsNotFound(PathBuf),

    #[error("failed to load settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Settings(Box::new(err))
    }
}

/// What a checked path is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Entry,
    Template,
}

impl std::fmt::Display for PathRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathRole::Entry => f.write_str("entry"),
            PathRole::Template => f.write_str("html template"),
        }
    }
}
