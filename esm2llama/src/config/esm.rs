use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{
    BaseConfig, ConfigError, ConfigRecord, Mapping,
    record::{deserialize_record, from_checked_mapping},
};

fn default_hidden_size() -> usize {
    768
}

fn default_num_hidden_layers() -> usize {
    12
}

fn default_num_attention_heads() -> usize {
    12
}

fn default_intermediate_size() -> usize {
    3072
}

fn default_hidden_act() -> String {
    "gelu".to_string()
}

fn default_dropout_prob() -> f64 {
    0.1
}

fn default_max_position_embeddings() -> usize {
    1026
}

fn default_initializer_range() -> f64 {
    0.02
}

fn default_layer_norm_eps() -> f64 {
    1e-12
}

fn default_position_embedding_type() -> String {
    "absolute".to_string()
}

fn default_true() -> bool {
    true
}

/// ESM-2 protein sequence encoder.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(remote = "Self")]
pub struct EsmConfig {
    #[serde(default)]
    pub vocab_size: Option<usize>,
    #[serde(default)]
    pub mask_token_id: Option<i64>,
    #[serde(default = "default_hidden_size")]
    pub hidden_size: usize,
    #[serde(default = "default_num_hidden_layers")]
    pub num_hidden_layers: usize,
    #[serde(default = "default_num_attention_heads")]
    pub num_attention_heads: usize,
    #[serde(default = "default_intermediate_size")]
    pub intermediate_size: usize,
    #[serde(default = "default_hidden_act")]
    pub hidden_act: String,
    #[serde(default = "default_dropout_prob")]
    pub hidden_dropout_prob: f64,
    #[serde(default = "default_dropout_prob")]
    pub attention_probs_dropout_prob: f64,
    #[serde(default = "default_max_position_embeddings")]
    pub max_position_embeddings: usize,
    #[serde(default = "default_initializer_range")]
    pub initializer_range: f64,
    #[serde(default = "default_layer_norm_eps")]
    pub layer_norm_eps: f64,
    #[serde(default = "default_position_embedding_type")]
    pub position_embedding_type: String,
    #[serde(default = "default_true")]
    pub use_cache: bool,
    #[serde(default)]
    pub emb_layer_norm_before: Option<bool>,
    #[serde(default)]
    pub token_dropout: bool,
    #[serde(default)]
    pub is_folding_model: bool,
    /// Folding-trunk settings, carried opaquely.
    #[serde(default)]
    pub esmfold_config: Option<Value>,
    #[serde(default)]
    pub vocab_list: Option<Vec<String>>,
    #[serde(flatten)]
    pub base: BaseConfig,
}

impl Default for EsmConfig {
    fn default() -> Self {
        Self {
            vocab_size: None,
            mask_token_id: None,
            hidden_size: default_hidden_size(),
            num_hidden_layers: default_num_hidden_layers(),
            num_attention_heads: default_num_attention_heads(),
            intermediate_size: default_intermediate_size(),
            hidden_act: default_hidden_act(),
            hidden_dropout_prob: default_dropout_prob(),
            attention_probs_dropout_prob: default_dropout_prob(),
            max_position_embeddings: default_max_position_embeddings(),
            initializer_range: default_initializer_range(),
            layer_norm_eps: default_layer_norm_eps(),
            position_embedding_type: default_position_embedding_type(),
            use_cache: true,
            emb_layer_norm_before: None,
            token_dropout: false,
            is_folding_model: false,
            esmfold_config: None,
            vocab_list: None,
            base: BaseConfig::default(),
        }
    }
}

impl ConfigRecord for EsmConfig {
    const MODEL_TYPE: &'static str = "esm";
    const FIELDS: &'static [&'static str] = &[
        "vocab_size",
        "mask_token_id",
        "hidden_size",
        "num_hidden_layers",
        "num_attention_heads",
        "intermediate_size",
        "hidden_act",
        "hidden_dropout_prob",
        "attention_probs_dropout_prob",
        "max_position_embeddings",
        "initializer_range",
        "layer_norm_eps",
        "position_embedding_type",
        "use_cache",
        "emb_layer_norm_before",
        "token_dropout",
        "is_folding_model",
        "esmfold_config",
        "vocab_list",
    ];

    fn from_mapping(mapping: Mapping) -> Result<Self, ConfigError> {
        from_checked_mapping(mapping, |fields| Self::deserialize(fields))
    }
}

impl Serialize for EsmConfig {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Self::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for EsmConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer)
    }
}
