//! Schema command implementation.

use kiln_config::ProjectSettings;

use crate::cli::SchemaArgs;
use crate::error::Result;

/// Print the JSON Schema describing `kiln.toml`.
pub fn execute(args: SchemaArgs) -> Result<()> {
    let schema = ProjectSettings::json_schema();
    let rendered = if args.compact {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}
