//! Loader chains.
//!
//! A [`LoaderChain`] is stored in declaration order, the order the engine
//! reads it in. The engine runs it back to front: the last declared step sees
//! the raw source first and the first declared step emits the result. Use
//! [`LoaderChain::execution_order`] whenever the run order matters.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::env::Parallelism;
use crate::profile::BuildProfile;

/// A content transformation the engine knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Loader {
    /// Injects compiled CSS into the page through `<style>` tags.
    #[serde(rename = "style-loader")]
    StyleInject,
    /// Extracts compiled CSS into standalone files.
    #[serde(rename = "mini-css-extract-plugin/loader")]
    CssExtract,
    /// Turns CSS into a module (resolves `@import` and `url()`).
    #[serde(rename = "css-loader")]
    Css,
    /// Vendor prefixing and syntax lowering.
    #[serde(rename = "postcss-loader")]
    PostCss,
    #[serde(rename = "less-loader")]
    Less,
    #[serde(rename = "sass-loader")]
    Sass,
    #[serde(rename = "stylus-loader")]
    Stylus,
    /// Moves the following loaders onto a worker pool.
    #[serde(rename = "thread-loader")]
    Thread,
    #[serde(rename = "babel-loader")]
    Babel,
}

impl Loader {
    pub fn name(self) -> &'static str {
        match self {
            Loader::StyleInject => "style-loader",
            Loader::CssExtract => "mini-css-extract-plugin/loader",
            Loader::Css => "css-loader",
            Loader::PostCss => "postcss-loader",
            Loader::Less => "less-loader",
            Loader::Sass => "sass-loader",
            Loader::Stylus => "stylus-loader",
            Loader::Thread => "thread-loader",
            Loader::Babel => "babel-loader",
        }
    }
}

impl std::fmt::Display for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of a chain plus its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderStep {
    pub loader: Loader,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
}

impl LoaderStep {
    pub fn new(loader: Loader) -> Self {
        Self {
            loader,
            options: IndexMap::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

impl From<Loader> for LoaderStep {
    fn from(loader: Loader) -> Self {
        LoaderStep::new(loader)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoaderChain {
    steps: Vec<LoaderStep>,
}

impl LoaderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a step in the innermost position.
    ///
    /// The step is appended in declaration order, so it runs before every
    /// step already in the chain.
    pub fn push_inner(&mut self, step: impl Into<LoaderStep>) -> &mut Self {
        self.steps.push(step.into());
        self
    }

    /// Steps in declaration order.
    pub fn steps(&self) -> &[LoaderStep] {
        &self.steps
    }

    /// Steps in the order the engine runs them.
    pub fn execution_order(&self) -> impl DoubleEndedIterator<Item = &LoaderStep> + '_ {
        self.steps.iter().rev()
    }

    pub fn loaders(&self) -> Vec<Loader> {
        self.steps.iter().map(|step| step.loader).collect()
    }

    pub fn execution_loaders(&self) -> Vec<Loader> {
        self.execution_order().map(|step| step.loader).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Stylesheet syntaxes with a dedicated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleDialect {
    Css,
    Less,
    /// Both the indented `.sass` and the braced `.scss` syntax.
    Sass,
    Stylus,
}

impl StyleDialect {
    pub const ALL: [StyleDialect; 4] = [
        StyleDialect::Css,
        StyleDialect::Less,
        StyleDialect::Sass,
        StyleDialect::Stylus,
    ];

    /// File extensions written in this dialect.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            StyleDialect::Css => &["css"],
            StyleDialect::Less => &["less"],
            StyleDialect::Sass => &["sass", "scss"],
            StyleDialect::Stylus => &["styl"],
        }
    }

    /// Step that turns the dialect into plain CSS, if one is needed.
    pub fn preprocessor(self) -> Option<Loader> {
        match self {
            StyleDialect::Css => None,
            StyleDialect::Less => Some(Loader::Less),
            StyleDialect::Sass => Some(Loader::Sass),
            StyleDialect::Stylus => Some(Loader::Stylus),
        }
    }
}

/// Build the chain for a stylesheet dialect.
///
/// Declaration order is `[emit, css-loader, postcss-loader?, preprocessor?]`
/// where `emit` is style injection in development and extraction in
/// production, and `postcss-loader` is production only.
pub fn style_chain(dialect: StyleDialect, profile: BuildProfile) -> LoaderChain {
    let mut chain = LoaderChain::new();

    match profile {
        BuildProfile::Development => chain.push_inner(Loader::StyleInject),
        BuildProfile::Production => chain.push_inner(Loader::CssExtract),
    };

    chain.push_inner(Loader::Css);

    if profile.is_production() {
        chain.push_inner(LoaderStep::new(Loader::PostCss).with_option(
            "postcssOptions",
            json!({ "plugins": ["postcss-preset-env"] }),
        ));
    }

    if let Some(preprocessor) = dialect.preprocessor() {
        chain.push_inner(preprocessor);
    }

    chain
}

/// Build the script chain: transpile with a cached babel, on a worker pool.
pub fn script_chain(parallelism: Parallelism) -> LoaderChain {
    let mut chain = LoaderChain::new();
    chain
        .push_inner(
            LoaderStep::new(Loader::Thread).with_option("workers", json!(parallelism.get())),
        )
        .push_inner(
            LoaderStep::new(Loader::Babel)
                .with_option("cacheDirectory", json!(true))
                .with_option("cacheCompression", json!(false))
                .with_option("plugins", json!(["@babel/plugin-transform-runtime"])),
        );
    chain
}
