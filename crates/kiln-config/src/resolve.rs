//! Profile resolution.
//!
//! [`ProfileResolver`] turns a [`BuildProfile`], the project settings and the
//! environment facts into a [`BuildConfig`]. Both profiles go through the same
//! code; only the profile-dependent decisions branch.

use std::path::Path;

use tracing::{debug, warn};

use crate::asset::AssetPolicy;
use crate::chain::{script_chain, style_chain, StyleDialect};
use crate::config::{BuildConfig, ModuleOptions};
use crate::env::{EnvironmentFacts, Parallelism};
use crate::error::Result;
use crate::optimize::OptimizerSet;
use crate::output::OutputOptions;
use crate::plugins::BuildPlugin;
use crate::profile::{BuildProfile, SourceMapMode};
use crate::rules::{ExtensionPattern, FileCategory, FileTypeRule, RuleScope, RuleSet};
use crate::settings::ProjectSettings;
use crate::validation::{ConfigValidator, FsValidator};

pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];
pub const MEDIA_EXTENSIONS: [&str; 6] = ["ttf", "woff", "woff2", "mp3", "mp4", "avi"];
pub const SCRIPT_EXTENSIONS: [&str; 1] = ["js"];

/// Directory name whose contents development builds never transpile.
pub const VENDOR_DIR: &str = "node_modules";

pub struct ProfileResolver<'a, E: EnvironmentFacts + ?Sized> {
    env: &'a E,
    settings: ProjectSettings,
}

impl<'a, E: EnvironmentFacts + ?Sized> ProfileResolver<'a, E> {
    pub fn new(env: &'a E) -> Self {
        Self {
            env,
            settings: ProjectSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ProjectSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    fn root(&self) -> &Path {
        self.env.working_dir()
    }

    /// Worker count: the settings override when present, else the host's.
    pub fn parallelism(&self) -> Parallelism {
        self.settings
            .parallel_jobs
            .and_then(Parallelism::new)
            .unwrap_or_else(|| self.env.parallelism())
    }

    /// Ordered file-type rules for `profile`.
    pub fn rules(&self, profile: BuildProfile) -> RuleSet {
        self.rules_with(profile, self.parallelism())
    }

    fn rules_with(&self, profile: BuildProfile, parallelism: Parallelism) -> RuleSet {
        let root = self.root();
        let mut rules = RuleSet::new(root);

        for dialect in StyleDialect::ALL {
            rules.push(FileTypeRule::chain(
                FileCategory::Style(dialect),
                ExtensionPattern::new(dialect.extensions().iter().copied()),
                style_chain(dialect, profile),
            ));
        }

        let image_policy = match self.settings.assets.inline_limit(profile) {
            Some(limit) => AssetPolicy::image_with_limit(limit),
            None => AssetPolicy::image(profile),
        };
        rules.push(FileTypeRule::asset(
            FileCategory::Image,
            ExtensionPattern::new(IMAGE_EXTENSIONS),
            image_policy,
        ));
        rules.push(FileTypeRule::asset(
            FileCategory::Media,
            ExtensionPattern::new(MEDIA_EXTENSIONS),
            AssetPolicy::media(),
        ));

        let script_scope = match profile {
            BuildProfile::Development => RuleScope::exclude(VENDOR_DIR),
            BuildProfile::Production => {
                RuleScope::include(ProjectSettings::resolve(root, &self.settings.source_dir))
            }
        };
        rules.push(
            FileTypeRule::chain(
                FileCategory::Script,
                ExtensionPattern::new(SCRIPT_EXTENSIONS),
                script_chain(parallelism),
            )
            .scoped(script_scope),
        );

        for overlap in rules.overlaps() {
            warn!(%overlap, "overlapping file-type rules");
        }

        rules
    }

    fn plugins(&self, profile: BuildProfile, parallelism: Parallelism) -> Vec<BuildPlugin> {
        let root = self.root();
        let mut plugins = vec![
            BuildPlugin::lint(
                ProjectSettings::resolve(root, &self.settings.source_dir),
                root,
                parallelism,
            ),
            BuildPlugin::Html {
                template: ProjectSettings::resolve(root, &self.settings.template),
            },
        ];

        if profile.is_production() {
            plugins.push(BuildPlugin::css_extract());
            plugins.push(BuildPlugin::preload_scripts());
        }

        plugins
    }

    /// Resolve the configuration for `profile` without touching the filesystem.
    pub fn resolve(&self, profile: BuildProfile) -> BuildConfig {
        let span = tracing::debug_span!("resolve", %profile);
        let _guard = span.enter();

        let root = self.root();
        let parallelism = self.parallelism();
        debug!(parallelism = parallelism.get(), root = %root.display(), "resolving configuration");

        let output_path = match profile {
            BuildProfile::Development => None,
            BuildProfile::Production => {
                Some(ProjectSettings::resolve(root, &self.settings.output_dir))
            }
        };

        let rules = self.rules_with(profile, parallelism);
        debug!(rules = rules.len(), "built file-type rules");

        let optimization = OptimizerSet::select(profile, parallelism);
        debug!(
            minimizers = optimization.minimizers.len(),
            code_splitting = optimization.code_splitting(),
            "selected optimizers"
        );

        let dev_server = match profile {
            BuildProfile::Development => Some(self.settings.dev.clone()),
            BuildProfile::Production => None,
        };

        BuildConfig {
            mode: profile,
            context: root.to_path_buf(),
            entry: self.settings.entry.clone(),
            output: OutputOptions::new(output_path),
            module: ModuleOptions { rules },
            plugins: self.plugins(profile, parallelism),
            optimization,
            devtool: SourceMapMode::for_profile(profile),
            dev_server,
            parallelism,
        }
    }

    /// Resolve, then check the result, including that referenced paths exist.
    pub fn resolve_checked(&self, profile: BuildProfile) -> Result<BuildConfig> {
        let config = self.resolve(profile);
        FsValidator::new(self.root()).validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::InlineDecision;
    use crate::chain::Loader;
    use crate::env::StaticEnvironment;
    use std::path::PathBuf;

    fn env() -> StaticEnvironment {
        StaticEnvironment::new(Some(4), "/project")
    }

    #[test]
    fn rule_order_matches_declaration() {
        let env = env();
        let rules = ProfileResolver::new(&env).rules(BuildProfile::Development);
        let categories: Vec<_> = rules.rules().iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["css", "less", "sass", "stylus", "image", "media", "script"]
        );
        assert!(rules.overlaps().is_empty());
    }

    #[test]
    fn development_script_rule_skips_vendor_code() {
        let env = env();
        let config = ProfileResolver::new(&env).resolve(BuildProfile::Development);
        assert_eq!(config.classify(Path::new("src/main.js")), Some(FileCategory::Script));
        assert_eq!(config.classify(Path::new("lib/other.js")), Some(FileCategory::Script));
        assert_eq!(config.classify(Path::new("node_modules/x/index.js")), None);
    }

    #[test]
    fn production_script_rule_only_covers_sources() {
        let env = env();
        let config = ProfileResolver::new(&env).resolve(BuildProfile::Production);
        assert_eq!(config.classify(Path::new("src/js/sum.js")), Some(FileCategory::Script));
        assert_eq!(config.classify(Path::new("lib/other.js")), None);
        assert_eq!(config.classify(Path::new("src/../lib/vendor.js")), None);
        assert_eq!(config.classify(Path::new("/project/src/../lib/x.js")), None);
        assert_eq!(
            config.classify(Path::new("./src/js/../main.js")),
            Some(FileCategory::Script)
        );
    }

    #[test]
    fn media_rule_uses_one_list_for_both_profiles() {
        let env = env();
        let resolver = ProfileResolver::new(&env);
        for profile in BuildProfile::ALL {
            let rules = resolver.rules(profile);
            let media = rules.rule_for(FileCategory::Media).unwrap();
            assert_eq!(media.pattern.extensions(), MEDIA_EXTENSIONS.as_slice());
            for file in ["a.woff", "a.woff2", "a.ttf", "a.mp3", "a.mp4", "a.avi"] {
                assert_eq!(rules.classify(Path::new(file)), Some(FileCategory::Media));
            }
            assert_eq!(rules.classify(Path::new("a.av")), None);
        }
    }

    #[test]
    fn settings_override_parallelism_and_thresholds() {
        let env = env();
        let mut settings = ProjectSettings {
            parallel_jobs: Some(2),
            ..ProjectSettings::default()
        };
        settings.assets.production_inline_limit = Some(100);

        let config = ProfileResolver::new(&env)
            .with_settings(settings)
            .resolve(BuildProfile::Production);

        assert_eq!(config.parallelism.get(), 2);
        assert_eq!(
            config.asset_decision(Path::new("logo.png"), 99),
            Some(InlineDecision::Inline)
        );
        assert_eq!(
            config.asset_decision(Path::new("logo.png"), 100),
            Some(InlineDecision::Emit)
        );
    }

    #[test]
    fn production_output_path_is_absolute() {
        let env = env();
        let config = ProfileResolver::new(&env).resolve(BuildProfile::Production);
        assert_eq!(config.output.path, Some(PathBuf::from("/project/dist")));

        let dev = ProfileResolver::new(&env).resolve(BuildProfile::Development);
        assert_eq!(dev.output.path, None);
    }

    #[test]
    fn chain_lookup_by_path() {
        let env = env();
        let config = ProfileResolver::new(&env).resolve(BuildProfile::Development);
        let chain = config.chain_for(Path::new("a.scss")).unwrap();
        assert_eq!(chain.execution_loaders()[0], Loader::Sass);
        assert!(config.chain_for(Path::new("a.png")).is_none());
    }
}
