//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::commands::utils::Project;
use crate::error::Result;

/// Print the resolved configuration as JSON on stdout.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let project = Project::load(&args.project)?;

    let config = if args.skip_checks {
        project.resolve()
    } else {
        project.resolve_checked()?
    };
    tracing::info!(
        profile = %project.profile,
        rules = config.rules().len(),
        workers = config.parallelism.get(),
        "resolved configuration"
    );

    println!("{}", config.to_json(!args.compact)?);
    Ok(())
}
