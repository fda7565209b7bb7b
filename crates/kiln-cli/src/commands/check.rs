//! Check command implementation.
//!
//! Validates the configuration for a profile without printing it.

use crate::cli::CheckArgs;
use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and check `kiln.toml` and `KILN_*` overrides
/// 2. Resolve the profile and run structural checks
/// 3. Check the entry module and HTML template exist
/// 4. Report overlapping rules as warnings
pub fn execute(args: CheckArgs) -> Result<()> {
    let project = Project::load(&args.project)?;
    ui::info(&format!(
        "Checking {} configuration in {}",
        project.profile,
        project.root.display()
    ));

    let config = project.resolve_checked()?;
    ui::success(&format!("  {} exists", config.entry.display()));

    let overlaps = config.rules().overlaps();
    if overlaps.is_empty() {
        ui::info("No overlapping rules");
    } else {
        ui::warning(&format!("Found {} overlapping rules:", overlaps.len()));
        for overlap in &overlaps {
            ui::warning(&format!("  - {overlap}"));
        }
    }

    ui::success("All checks passed!");
    Ok(())
}
