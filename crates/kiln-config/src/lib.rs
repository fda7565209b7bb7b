//! Build configuration resolution for the kiln bundler front end.
//!
//! Given a [`BuildProfile`] and facts about the host, [`ProfileResolver`]
//! produces the complete [`BuildConfig`] the build engine consumes: file-type
//! rules with their loader chains, asset inlining policy, output naming,
//! plugins, optimizers and dev server settings.

pub mod asset;
pub mod chain;
pub mod config;
pub mod dev;
pub mod discovery;
pub mod env;
pub mod error;
pub mod optimize;
pub mod output;
pub mod plugins;
pub mod profile;
pub mod resolve;
pub mod rules;
pub mod settings;
pub mod validation;

// Re-export main types
pub use asset::{AssetPolicy, InlineDecision};
pub use chain::{Loader, LoaderChain, LoaderStep, StyleDialect, script_chain, style_chain};
pub use config::{BuildConfig, ModuleOptions};
pub use dev::DevServer;
pub use env::{EnvironmentFacts, HostEnvironment, Parallelism, StaticEnvironment};
pub use error::{ConfigError, PathRole, Result};
pub use optimize::{ImagePass, Minimizer, OptimizerSet, SplitChunks};
pub use output::{FilenameTemplate, OutputOptions, TemplateToken};
pub use plugins::BuildPlugin;
pub use profile::{BuildProfile, SourceMapMode};
pub use resolve::ProfileResolver;
pub use rules::{ExtensionPattern, FileCategory, FileTypeRule, RuleAction, RuleScope, RuleSet};
pub use settings::{AssetSettings, ProjectSettings};

// Re-export discovery and validation
pub use discovery::{ENV_PREFIX, SETTINGS_FILE, SettingsDiscovery};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
