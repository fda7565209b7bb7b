//! Asset command implementation.
//!
//! Applies the profile's asset policy to real files.

use kiln_config::{FileCategory, InlineDecision};

use crate::cli::AssetArgs;
use crate::commands::utils::Project;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Print `inline` or `emit` for each file, based on its size on disk.
pub fn execute(args: AssetArgs) -> Result<()> {
    let project = Project::load(&args.project)?;
    let config = project.resolve();

    for file in &args.files {
        let path = project.path(file);
        let size = std::fs::metadata(&path).with_path(&path)?.len();

        let line = match config.classify(&path) {
            Some(category @ (FileCategory::Image | FileCategory::Media)) => {
                let decision = config
                    .asset_decision(&path, size)
                    .unwrap_or(InlineDecision::Emit);
                let verdict = match decision {
                    InlineDecision::Inline => "inline",
                    InlineDecision::Emit => "emit",
                };
                tracing::debug!(file = %path.display(), size, %category, verdict, "asset decision");
                format!(
                    "{}: {} ({}, {})",
                    file.display(),
                    verdict,
                    category,
                    ui::format_size(size)
                )
            }
            _ => {
                ui::warning(&format!("{} is not an asset", file.display()));
                format!("{}: not an asset", file.display())
            }
        };
        println!("{line}");
    }
    Ok(())
}
