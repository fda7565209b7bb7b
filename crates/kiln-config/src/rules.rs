//! File-type rules and first-match-wins classification.
//!
//! Rules are kept in an ordered list and evaluated top to bottom. Two rules
//! claiming the same extension is legal: the earlier one always wins, and
//! [`RuleSet::overlaps`] exists to surface it.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::asset::AssetPolicy;
use crate::chain::{LoaderChain, StyleDialect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Style(StyleDialect),
    /// Raster images, eligible for inlining.
    Image,
    /// Fonts, audio and video, always emitted as files.
    Media,
    Script,
}

impl FileCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FileCategory::Style(StyleDialect::Css) => "css",
            FileCategory::Style(StyleDialect::Less) => "less",
            FileCategory::Style(StyleDialect::Sass) => "sass",
            FileCategory::Style(StyleDialect::Stylus) => "stylus",
            FileCategory::Image => "image",
            FileCategory::Media => "media",
            FileCategory::Script => "script",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FileCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Matches a path by its final extension. Case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPattern {
    extensions: Vec<String>,
}

impl ExtensionPattern {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|candidate| candidate == ext))
    }

    /// Equivalent regular expression source, as the engine expects in `test`.
    pub fn to_regex(&self) -> String {
        match self.extensions.as_slice() {
            [single] => format!(r"\.{single}$"),
            many => format!(r"\.({})$", many.join("|")),
        }
    }
}

/// Restricts a rule to part of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleScope {
    /// Only paths under this directory match.
    pub include: Option<PathBuf>,
    /// Paths with a component equal to this name never match.
    pub exclude: Option<String>,
}

impl RuleScope {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn include(dir: impl AsRef<Path>) -> Self {
        Self {
            include: Some(normalize(dir.as_ref())),
            exclude: None,
        }
    }

    pub fn exclude(component: impl Into<String>) -> Self {
        Self {
            include: None,
            exclude: Some(component.into()),
        }
    }

    fn admits(&self, path: &Path) -> bool {
        if let Some(dir) = &self.include {
            if !path.starts_with(dir) {
                return false;
            }
        }
        if let Some(name) = &self.exclude {
            let excluded = path.components().any(|component| match component {
                Component::Normal(part) => part.to_str() == Some(name.as_str()),
                _ => false,
            });
            if excluded {
                return false;
            }
        }
        true
    }
}

/// What the engine does with a matched file.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleAction {
    Chain(LoaderChain),
    Asset(AssetPolicy),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileTypeRule {
    pub category: FileCategory,
    pub pattern: ExtensionPattern,
    pub scope: RuleScope,
    pub action: RuleAction,
}

impl FileTypeRule {
    pub fn chain(category: FileCategory, pattern: ExtensionPattern, chain: LoaderChain) -> Self {
        Self {
            category,
            pattern,
            scope: RuleScope::any(),
            action: RuleAction::Chain(chain),
        }
    }

    pub fn asset(category: FileCategory, pattern: ExtensionPattern, policy: AssetPolicy) -> Self {
        Self {
            category,
            pattern,
            scope: RuleScope::any(),
            action: RuleAction::Asset(policy),
        }
    }

    pub fn scoped(mut self, scope: RuleScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.pattern.matches(path) && self.scope.admits(path)
    }

    pub fn loader_chain(&self) -> Option<&LoaderChain> {
        match &self.action {
            RuleAction::Chain(chain) => Some(chain),
            RuleAction::Asset(_) => None,
        }
    }

    pub fn asset_policy(&self) -> Option<&AssetPolicy> {
        match &self.action {
            RuleAction::Asset(policy) => Some(policy),
            RuleAction::Chain(_) => None,
        }
    }
}

impl Serialize for FileTypeRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("category", &self.category)?;
        map.serialize_entry("test", &self.pattern.to_regex())?;
        if let Some(include) = &self.scope.include {
            map.serialize_entry("include", include)?;
        }
        if let Some(exclude) = &self.scope.exclude {
            map.serialize_entry("exclude", exclude)?;
        }
        match &self.action {
            RuleAction::Chain(chain) => map.serialize_entry("use", chain)?,
            RuleAction::Asset(policy) => map.serialize_entry("asset", policy)?,
        }
        map.end()
    }
}

/// An extension claimed by more than one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOverlap {
    pub extension: String,
    pub winner: FileCategory,
    pub shadowed: FileCategory,
}

impl fmt::Display for RuleOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ".{} is claimed by `{}` and `{}`; `{}` wins",
            self.extension, self.winner, self.shadowed, self.winner
        )
    }
}

/// Ordered rules, anchored at the project root.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    root: PathBuf,
    rules: Vec<FileTypeRule>,
}

impl RuleSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            rules: Vec::new(),
        }
    }

    pub fn push(&mut self, rule: FileTypeRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[FileTypeRule] {
        &self.rules
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule matching `path`. Relative paths resolve against the root,
    /// and `.`/`..` segments are folded before scopes are checked.
    pub fn find(&self, path: &Path) -> Option<&FileTypeRule> {
        let path = normalize(&self.root.join(path));
        self.rules.iter().find(|rule| rule.matches(&path))
    }

    /// Category of the first matching rule, `None` for unhandled files.
    pub fn classify(&self, path: &Path) -> Option<FileCategory> {
        self.find(path).map(|rule| rule.category)
    }

    /// Rule for a category, if the set has one.
    pub fn rule_for(&self, category: FileCategory) -> Option<&FileTypeRule> {
        self.rules.iter().find(|rule| rule.category == category)
    }

    /// Extensions that more than one rule claims. Scopes are ignored.
    pub fn overlaps(&self) -> Vec<RuleOverlap> {
        let mut overlaps = Vec::new();
        for (index, rule) in self.rules.iter().enumerate() {
            for extension in rule.pattern.extensions() {
                let winner = self.rules[..index]
                    .iter()
                    .find(|earlier| earlier.pattern.extensions().contains(extension));
                if let Some(winner) = winner {
                    overlaps.push(RuleOverlap {
                        extension: extension.clone(),
                        winner: winner.category,
                        shadowed: rule.category,
                    });
                }
            }
        }
        overlaps
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rules.len()))?;
        for rule in &self.rules {
            seq.serialize_element(rule)?;
        }
        seq.end()
    }
}

/// Lexically fold `.` and `..` components. Does not touch the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
