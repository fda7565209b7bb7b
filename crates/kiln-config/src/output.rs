//! Output location and file naming.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const SCRIPT_FILENAME: &str = "static/js/[name].[contenthash:8].js";
pub const SCRIPT_CHUNK_FILENAME: &str = "static/js/[name].[contenthash:8].chunk.js";

/// A file name pattern with `[token]` placeholders.
///
/// Recognized tokens: `[name]`, `[hash]`, `[contenthash]`, `[ext]` and
/// `[query]`. Hash tokens accept a length suffix such as `[contenthash:8]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    Name,
    Hash(Option<usize>),
    ContentHash(Option<usize>),
    Ext,
    Query,
}

impl FilenameTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tokens in order of appearance.
    pub fn tokens(&self) -> Result<Vec<TemplateToken>> {
        let mut tokens = Vec::new();
        let mut rest = self.0.as_str();
        while let Some(start) = rest.find('[') {
            let after = &rest[start + 1..];
            let end = after.find(']').ok_or_else(|| self.invalid("unclosed `[`"))?;
            tokens.push(self.parse_token(&after[..end])?);
            rest = &after[end + 1..];
        }
        Ok(tokens)
    }

    fn parse_token(&self, raw: &str) -> Result<TemplateToken> {
        let (name, len) = match raw.split_once(':') {
            Some((name, len)) => {
                let len = len
                    .parse::<usize>()
                    .ok()
                    .filter(|len| *len > 0)
                    .ok_or_else(|| self.invalid(&format!("bad hash length in `[{raw}]`")))?;
                (name, Some(len))
            }
            None => (raw, None),
        };
        match (name, len) {
            ("name", None) => Ok(TemplateToken::Name),
            ("ext", None) => Ok(TemplateToken::Ext),
            ("query", None) => Ok(TemplateToken::Query),
            ("hash", len) => Ok(TemplateToken::Hash(len)),
            ("contenthash", len) => Ok(TemplateToken::ContentHash(len)),
            _ => Err(self.invalid(&format!("unknown token `[{raw}]`"))),
        }
    }

    fn invalid(&self, hint: &str) -> ConfigError {
        ConfigError::InvalidTemplate {
            field: "filename".to_string(),
            template: self.0.clone(),
            hint: hint.to_string(),
        }
    }

    /// True when the template names a chunk and carries a content hash.
    pub fn is_cache_busting(&self) -> Result<bool> {
        let tokens = self.tokens()?;
        let named = tokens.contains(&TemplateToken::Name);
        let hashed = tokens
            .iter()
            .any(|token| matches!(token, TemplateToken::ContentHash(_)));
        Ok(named && hashed)
    }

    /// Substitute `[name]` and content-hash tokens.
    ///
    /// Hash tokens with a length keep that many leading characters of `hash`.
    pub fn render(&self, name: &str, hash: &str) -> Result<String> {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();
        while let Some(start) = rest.find('[') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find(']').ok_or_else(|| self.invalid("unclosed `[`"))?;
            match self.parse_token(&after[..end])? {
                TemplateToken::Name => out.push_str(name),
                TemplateToken::Hash(len) | TemplateToken::ContentHash(len) => {
                    match len {
                        Some(len) => out.extend(hash.chars().take(len)),
                        None => out.push_str(hash),
                    }
                }
                TemplateToken::Ext | TemplateToken::Query => {
                    out.push('[');
                    out.push_str(&after[..end]);
                    out.push(']');
                }
            }
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

impl std::fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Absolute output directory. `None` when artifacts are served from memory.
    #[serde(default)]
    pub path: Option<PathBuf>,

    pub filename: FilenameTemplate,

    pub chunk_filename: FilenameTemplate,

    /// Empty the output directory before writing.
    #[serde(default)]
    pub clean: bool,
}

impl OutputOptions {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            filename: FilenameTemplate::new(SCRIPT_FILENAME),
            chunk_filename: FilenameTemplate::new(SCRIPT_CHUNK_FILENAME),
            clean: true,
        }
    }
}
