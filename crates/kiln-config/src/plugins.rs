//! Engine plugins enabled per profile.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env::Parallelism;

pub const CSS_FILENAME: &str = "static/css/[name].css";
pub const CSS_CHUNK_FILENAME: &str = "static/css/[name].chunk.css";

/// Resource hint emitted for preloaded chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreloadRel {
    Preload,
    Prefetch,
}

/// Engine plugins the configuration enables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum BuildPlugin {
    /// Lint sources as part of the build.
    Lint {
        context: PathBuf,
        exclude: String,
        cache: bool,
        cache_location: PathBuf,
        threads: Parallelism,
    },
    /// Generate the HTML page from a template and inject the bundles.
    Html { template: PathBuf },
    /// Write extracted stylesheets.
    CssExtract {
        filename: String,
        chunk_filename: String,
    },
    Preload {
        rel: PreloadRel,
        #[serde(rename = "as")]
        as_kind: String,
    },
}

impl BuildPlugin {
    pub fn lint(source_dir: PathBuf, root: &std::path::Path, threads: Parallelism) -> Self {
        BuildPlugin::Lint {
            context: source_dir,
            exclude: "node_modules".to_string(),
            cache: true,
            cache_location: root.join("node_modules/.cache/eslintcache"),
            threads,
        }
    }

    pub fn css_extract() -> Self {
        BuildPlugin::CssExtract {
            filename: CSS_FILENAME.to_string(),
            chunk_filename: CSS_CHUNK_FILENAME.to_string(),
        }
    }

    pub fn preload_scripts() -> Self {
        BuildPlugin::Preload {
            rel: PreloadRel::Preload,
            as_kind: "script".to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuildPlugin::Lint { .. } => "lint",
            BuildPlugin::Html { .. } => "html",
            BuildPlugin::CssExtract { .. } => "css-extract",
            BuildPlugin::Preload { .. } => "preload",
        }
    }
}
