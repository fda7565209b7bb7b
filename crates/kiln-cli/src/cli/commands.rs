use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::Profile;

/// Available kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and print the build configuration
    ///
    /// Writes the configuration object for the chosen profile to stdout as
    /// JSON. Entry and template paths are checked unless --skip-checks is set.
    Resolve(ResolveArgs),

    /// Validate the configuration for a profile
    ///
    /// Runs structural and filesystem checks and reports overlapping rules.
    Check(CheckArgs),

    /// Show how files are classified
    ///
    /// Prints the category and the loader chain, in execution order, for
    /// each path.
    Classify(ClassifyArgs),

    /// Show inline-or-emit decisions for asset files
    ///
    /// Reads each file's size from disk and applies the profile's policy.
    Asset(AssetArgs),

    /// Print the JSON Schema of kiln.toml
    Schema(SchemaArgs),
}

/// Options shared by every command that resolves a configuration
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Build profile
    #[arg(short, long, value_enum, default_value = "development")]
    pub profile: Profile,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Settings file to use instead of <root>/kiln.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Do not require the entry and template files to exist
    #[arg(long)]
    pub skip_checks: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Paths to classify, relative to the project root
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the asset command
#[derive(Args, Debug)]
pub struct AssetArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Asset files, relative to the project root
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}
