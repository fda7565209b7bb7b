//! Classify command implementation.
//!
//! Shows which rule claims each path and what its chain does.

use serde::Serialize;

use kiln_config::{BuildConfig, RuleAction};

use crate::cli::ClassifyArgs;
use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;

#[derive(Debug, Serialize)]
struct Classification {
    path: String,
    category: Option<&'static str>,
    /// Loaders in the order they run.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    chain: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    asset: Option<&'static str>,
}

fn classify(config: &BuildConfig, path: &std::path::Path) -> Classification {
    let rule = config.rule_for_path(path);
    let (chain, asset) = match rule.map(|rule| &rule.action) {
        Some(RuleAction::Chain(chain)) => (
            chain.execution_order().map(|step| step.loader.name()).collect(),
            None,
        ),
        Some(RuleAction::Asset(policy)) => (
            Vec::new(),
            Some(if policy.may_inline() {
                "inline below threshold"
            } else {
                "always emitted"
            }),
        ),
        None => (Vec::new(), None),
    };

    Classification {
        path: path.display().to_string(),
        category: rule.map(|rule| rule.category.as_str()),
        chain,
        asset,
    }
}

/// Print the category and chain for each path, or "unhandled".
pub fn execute(args: ClassifyArgs) -> Result<()> {
    let project = Project::load(&args.project)?;
    let config = project.resolve();

    let results: Vec<_> = args
        .paths
        .iter()
        .map(|path| classify(&config, path))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (path, result) in args.paths.iter().zip(&results) {
        match result.category {
            None => println!("{}: unhandled", result.path),
            Some(category) => match config.chain_for(path) {
                Some(chain) => println!("{}: {} ({})", result.path, category, ui::format_chain(chain)),
                None => println!(
                    "{}: {} ({})",
                    result.path,
                    category,
                    result.asset.unwrap_or("asset")
                ),
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_config::{BuildProfile, ProfileResolver, StaticEnvironment};
    use std::path::Path;

    fn config(profile: BuildProfile) -> BuildConfig {
        let env = StaticEnvironment::new(Some(2), "/project");
        ProfileResolver::new(&env).resolve(profile)
    }

    #[test]
    fn test_classify_style_chain() {
        let result = classify(&config(BuildProfile::Production), Path::new("a.sass"));
        assert_eq!(result.category, Some("sass"));
        assert_eq!(
            result.chain,
            vec![
                "sass-loader",
                "postcss-loader",
                "css-loader",
                "mini-css-extract-plugin/loader"
            ]
        );
    }

    #[test]
    fn test_classify_media() {
        let result = classify(&config(BuildProfile::Development), Path::new("font.woff2"));
        assert_eq!(result.category, Some("media"));
        assert_eq!(result.asset, Some("always emitted"));
        assert!(result.chain.is_empty());
    }

    #[test]
    fn test_classify_unhandled() {
        let result = classify(&config(BuildProfile::Development), Path::new("notes.txt"));
        assert_eq!(result.category, None);
    }
}
