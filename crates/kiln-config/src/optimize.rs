//! Post-build optimization passes.

use serde::{Deserialize, Serialize};

use crate::env::Parallelism;
use crate::profile::BuildProfile;

/// Attribute ordering used by the vector-image cleanup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XmlnsOrder {
    Alphabetical,
    Front,
}

/// Per-format image compaction strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ImagePass {
    Gifsicle { interlaced: bool },
    Jpegtran { progressive: bool },
    Optipng { optimization_level: u8 },
    /// Vector cleanup: default preset, id prefixing, sorted attributes.
    Svgo {
        preset_default: bool,
        prefix_ids: bool,
        sort_attrs: XmlnsOrder,
    },
}

impl ImagePass {
    pub fn standard() -> Vec<ImagePass> {
        vec![
            ImagePass::Gifsicle { interlaced: true },
            ImagePass::Jpegtran { progressive: true },
            ImagePass::Optipng {
                optimization_level: 5,
            },
            ImagePass::Svgo {
                preset_default: true,
                prefix_ids: true,
                sort_attrs: XmlnsOrder::Alphabetical,
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Minimizer {
    /// Style compaction.
    Css { parallel: Parallelism },
    /// Script compaction.
    Script { parallel: Parallelism },
    Image { passes: Vec<ImagePass> },
}

impl Minimizer {
    pub fn parallelism(&self) -> Option<Parallelism> {
        match self {
            Minimizer::Css { parallel } | Minimizer::Script { parallel } => Some(*parallel),
            Minimizer::Image { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    All,
    Async,
    Initial,
}

/// Shared dependencies grouped into separately cacheable chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitChunks {
    pub chunks: ChunkSelection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerSet {
    pub minimize: bool,

    #[serde(rename = "minimizer")]
    pub minimizers: Vec<Minimizer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_chunks: Option<SplitChunks>,
}

impl OptimizerSet {
    /// Passes to activate for `profile`. Development gets none.
    pub fn select(profile: BuildProfile, parallelism: Parallelism) -> Self {
        match profile {
            BuildProfile::Development => OptimizerSet::default(),
            BuildProfile::Production => OptimizerSet {
                minimize: true,
                minimizers: vec![
                    Minimizer::Css {
                        parallel: parallelism,
                    },
                    Minimizer::Script {
                        parallel: parallelism,
                    },
                    Minimizer::Image {
                        passes: ImagePass::standard(),
                    },
                ],
                split_chunks: Some(SplitChunks {
                    chunks: ChunkSelection::All,
                }),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.minimizers.is_empty()
    }

    pub fn code_splitting(&self) -> bool {
        self.split_chunks.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn development_is_empty() {
        let set = OptimizerSet::select(BuildProfile::Development, Parallelism::new(8).unwrap());
        assert!(set.is_empty());
        assert!(!set.minimize);
        assert!(!set.code_splitting());
    }

    #[test]
    fn production_has_three_passes_with_parallelism() {
        let parallel = Parallelism::new(8).unwrap();
        let set = OptimizerSet::select(BuildProfile::Production, parallel);

        assert!(set.minimize);
        assert!(set.code_splitting());
        assert_eq!(set.minimizers.len(), 3);
        assert_eq!(set.minimizers[0], Minimizer::Css { parallel });
        assert_eq!(set.minimizers[1], Minimizer::Script { parallel });
        assert!(matches!(&set.minimizers[2], Minimizer::Image { passes } if passes.len() == 4));
        assert_eq!(set.minimizers[2].parallelism(), None);
    }

    #[test]
    fn image_passes_serialize_with_options() {
        let value = serde_json::to_value(ImagePass::standard()).unwrap();
        assert_eq!(value[0], json!({ "name": "gifsicle", "interlaced": true }));
        assert_eq!(value[2], json!({ "name": "optipng", "optimizationLevel": 5 }));
        assert_eq!(value[3]["sortAttrs"], "alphabetical");
    }

    #[test]
    fn split_chunks_serializes_all() {
        let set = OptimizerSet::select(BuildProfile::Production, Parallelism::SERIAL);
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["splitChunks"], json!({ "chunks": "all" }));
        assert_eq!(value["minimizer"][0], json!({ "kind": "css", "parallel": 1 }));
    }
}
