//! The resolved configuration object handed to the build engine.

use std::path::{Path, PathBuf};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::asset::{AssetPolicy, InlineDecision};
use crate::chain::LoaderChain;
use crate::dev::DevServer;
use crate::env::Parallelism;
use crate::error::{ConfigError, Result};
use crate::optimize::OptimizerSet;
use crate::output::OutputOptions;
use crate::plugins::BuildPlugin;
use crate::profile::{BuildProfile, SourceMapMode};
use crate::rules::{FileCategory, FileTypeRule, RuleSet};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub mode: BuildProfile,

    /// Project root every relative path is resolved against.
    pub context: PathBuf,

    /// Entry module, relative to `context`.
    pub entry: PathBuf,

    pub output: OutputOptions,

    pub module: ModuleOptions,

    pub plugins: Vec<BuildPlugin>,

    pub optimization: OptimizerSet,

    pub devtool: SourceMapMode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServer>,

    pub parallelism: Parallelism,
}

/// Module rules, emitted as a single `oneOf` group so the engine stops at the
/// first match.
#[derive(Debug, Clone)]
pub struct ModuleOptions {
    pub rules: RuleSet,
}

impl Serialize for ModuleOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct OneOf<'a> {
            one_of: &'a RuleSet,
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("rules", &[OneOf { one_of: &self.rules }])?;
        map.end()
    }
}

impl BuildConfig {
    pub fn rules(&self) -> &RuleSet {
        &self.module.rules
    }

    pub fn classify(&self, path: &Path) -> Option<FileCategory> {
        self.module.rules.classify(path)
    }

    pub fn rule_for_path(&self, path: &Path) -> Option<&FileTypeRule> {
        self.module.rules.find(path)
    }

    /// Loader chain that will process `path`, if it is handled by a chain.
    pub fn chain_for(&self, path: &Path) -> Option<&LoaderChain> {
        self.rule_for_path(path).and_then(FileTypeRule::loader_chain)
    }

    pub fn asset_policy(&self, category: FileCategory) -> Option<&AssetPolicy> {
        self.module
            .rules
            .rule_for(category)
            .and_then(FileTypeRule::asset_policy)
    }

    /// Inline-or-emit decision for an asset at `path` weighing `size` bytes.
    /// `None` when the path is not an asset.
    pub fn asset_decision(&self, path: &Path, size: u64) -> Option<InlineDecision> {
        self.rule_for_path(path)
            .and_then(FileTypeRule::asset_policy)
            .map(|policy| policy.decide(size))
    }

    pub fn plugin(&self, name: &str) -> Option<&BuildPlugin> {
        self.plugins.iter().find(|plugin| plugin.name() == name)
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
