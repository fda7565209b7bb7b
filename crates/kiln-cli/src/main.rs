//! kiln CLI - resolve bundler build configurations per profile.
//!
//! This is the main entry point. It parses arguments, initializes logging and
//! dispatches to the command implementations.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Classify(classify_args) => commands::classify_execute(classify_args),
        cli::Command::Asset(asset_args) => commands::asset_execute(asset_args),
        cli::Command::Schema(schema_args) => commands::schema_execute(schema_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
