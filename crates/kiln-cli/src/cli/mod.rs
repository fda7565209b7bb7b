//! Command-line interface definition for kiln.
//!
//! # Command Structure
//!
//! - `kiln resolve` - print the resolved configuration as JSON
//! - `kiln check` - validate the configuration against the project tree
//! - `kiln classify` - show which rule and chain handle given paths
//! - `kiln asset` - show the inline-or-emit decision for asset files
//! - `kiln schema` - print the JSON Schema of `kiln.toml`

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{AssetArgs, CheckArgs, ClassifyArgs, Command, ProjectArgs, ResolveArgs, SchemaArgs};
pub use enums::*;

/// kiln - build configuration resolver
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Resolve bundler build configurations per profile",
    long_about = "kiln turns a build profile (development or production) and facts about the\n\
                  host into the complete configuration object a bundler consumes: file-type\n\
                  rules, loader chains, asset inlining, plugins and optimizers."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
