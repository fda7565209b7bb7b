//! Inline-or-emit decisions for binary assets.

use serde::{Deserialize, Serialize};

use crate::profile::BuildProfile;

/// Images below this size are inlined during development.
pub const DEV_IMAGE_INLINE_LIMIT: u64 = 1024 * 1024;

/// Images below this size are inlined in production builds.
pub const PROD_IMAGE_INLINE_LIMIT: u64 = 10 * 1024;

pub const IMAGE_FILENAME: &str = "static/imgs/[hash:8][ext][query]";
pub const MEDIA_FILENAME: &str = "static/media/[hash:8][ext][query]";

/// How the engine treats a matched asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum AssetPolicy {
    /// Embed as a data URI when strictly smaller than `max_inline_size`.
    #[serde(rename = "asset")]
    Inline {
        max_inline_size: u64,
        filename: String,
    },
    /// Always copy to the output as its own file.
    #[serde(rename = "asset/resource")]
    Resource { filename: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineDecision {
    Inline,
    Emit,
}

impl AssetPolicy {
    /// Policy for raster images, with the profile's default threshold.
    pub fn image(profile: BuildProfile) -> Self {
        let limit = match profile {
            BuildProfile::Development => DEV_IMAGE_INLINE_LIMIT,
            BuildProfile::Production => PROD_IMAGE_INLINE_LIMIT,
        };
        Self::image_with_limit(limit)
    }

    pub fn image_with_limit(max_inline_size: u64) -> Self {
        AssetPolicy::Inline {
            max_inline_size,
            filename: IMAGE_FILENAME.to_string(),
        }
    }

    /// Fonts, audio and video are never inlined.
    pub fn media() -> Self {
        AssetPolicy::Resource {
            filename: MEDIA_FILENAME.to_string(),
        }
    }

    pub fn may_inline(&self) -> bool {
        matches!(self, AssetPolicy::Inline { .. })
    }

    pub fn inline_threshold(&self) -> Option<u64> {
        match self {
            AssetPolicy::Inline {
                max_inline_size, ..
            } => Some(*max_inline_size),
            AssetPolicy::Resource { .. } => None,
        }
    }

    pub fn filename(&self) -> &str {
        match self {
            AssetPolicy::Inline { filename, .. } | AssetPolicy::Resource { filename } => filename,
        }
    }

    /// Decide for an asset of `size` bytes. The threshold is exclusive.
    pub fn decide(&self, size: u64) -> InlineDecision {
        match self {
            AssetPolicy::Inline {
                max_inline_size, ..
            } if size < *max_inline_size => InlineDecision::Inline,
            _ => InlineDecision::Emit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_image_scenarios() {
        let policy = AssetPolicy::image(BuildProfile::Production);
        assert_eq!(policy.decide(8 * 1024), InlineDecision::Inline);
        assert_eq!(policy.decide(12 * 1024), InlineDecision::Emit);
    }

    #[test]
    fn threshold_is_exclusive() {
        for profile in BuildProfile::ALL {
            let policy = AssetPolicy::image(profile);
            let limit = policy.inline_threshold().unwrap();
            assert_eq!(policy.decide(limit - 1), InlineDecision::Inline);
            assert_eq!(policy.decide(limit), InlineDecision::Emit);
            assert_eq!(policy.decide(limit + 1), InlineDecision::Emit);
        }
    }

    #[test]
    fn development_inlines_larger_images() {
        let dev = AssetPolicy::image(BuildProfile::Development);
        let prod = AssetPolicy::image(BuildProfile::Production);
        assert!(dev.inline_threshold() > prod.inline_threshold());
        assert_eq!(dev.decide(500 * 1024), InlineDecision::Inline);
        assert_eq!(prod.decide(500 * 1024), InlineDecision::Emit);
    }

    #[test]
    fn media_never_inlines() {
        let media = AssetPolicy::media();
        assert!(!media.may_inline());
        assert_eq!(media.decide(0), InlineDecision::Emit);
        assert_eq!(media.decide(1), InlineDecision::Emit);
    }

    #[test]
    fn serializes_with_engine_type_tag() {
        let value = serde_json::to_value(AssetPolicy::image(BuildProfile::Production)).unwrap();
        assert_eq!(value["type"], "asset");
        assert_eq!(value["maxInlineSize"], 10 * 1024);
        assert_eq!(value["filename"], IMAGE_FILENAME);

        let value = serde_json::to_value(AssetPolicy::media()).unwrap();
        assert_eq!(value["type"], "asset/resource");
    }
}
