use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{
    BaseConfig, ConfigError, ConfigRecord, Mapping,
    record::{deserialize_record, from_checked_mapping},
};

fn default_vocab_size() -> usize {
    32000
}

fn default_hidden_size() -> usize {
    4096
}

fn default_intermediate_size() -> usize {
    11008
}

fn default_num_hidden_layers() -> usize {
    32
}

fn default_num_attention_heads() -> usize {
    32
}

fn default_hidden_act() -> String {
    "silu".to_string()
}

fn default_max_position_embeddings() -> usize {
    2048
}

fn default_initializer_range() -> f64 {
    0.02
}

fn default_rms_norm_eps() -> f64 {
    1e-6
}

fn default_true() -> bool {
    true
}

fn default_pretraining_tp() -> usize {
    1
}

fn default_rope_theta() -> f64 {
    10000.0
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "rope_type", rename_all = "snake_case")]
pub enum RopeScaling {
    Default,
    Linear {
        factor: f64,
    },
    Dynamic {
        factor: f64,
    },
    Yarn {
        factor: f64,
        #[serde(default)]
        original_max_position_embeddings: Option<usize>,
        #[serde(default)]
        attention_factor: Option<f64>,
        #[serde(default)]
        beta_fast: Option<f64>,
        #[serde(default)]
        beta_slow: Option<f64>,
    },
    Llama3 {
        factor: f64,
        low_freq_factor: f64,
        high_freq_factor: f64,
        original_max_position_embeddings: usize,
    },
}

impl RopeScaling {
    pub fn factor(&self) -> Option<f64> {
        match self {
            RopeScaling::Default => None,
            RopeScaling::Linear {
                factor,
            } => Some(*factor),
            RopeScaling::Dynamic {
                factor,
            } => Some(*factor),
            RopeScaling::Yarn {
                factor,
                ..
            } => Some(*factor),
            RopeScaling::Llama3 {
                factor,
                ..
            } => Some(*factor),
        }
    }
}

/// Older checkpoints name the scaling tag `type`. `rope_type` wins when both
/// are present.
fn deserialize_rope_scaling<'de, D>(
    deserializer: D
) -> Result<Option<RopeScaling>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(mut scaling) = Option::<Mapping>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(legacy_type) = scaling.remove("type") {
        scaling.entry("rope_type").or_insert(legacy_type);
    }
    RopeScaling::deserialize(Value::Object(scaling))
        .map(Some)
        .map_err(serde::de::Error::custom)
}

/// Llama causal language model decoder.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(remote = "Self")]
pub struct LlamaConfig {
    #[serde(default = "default_vocab_size")]
    pub vocab_size: usize,
    #[serde(default = "default_hidden_size")]
    pub hidden_size: usize,
    #[serde(default = "default_intermediate_size")]
    pub intermediate_size: usize,
    #[serde(default = "default_num_hidden_layers")]
    pub num_hidden_layers: usize,
    #[serde(default = "default_num_attention_heads")]
    pub num_attention_heads: usize,
    #[serde(default)]
    pub num_key_value_heads: Option<usize>,
    #[serde(default)]
    pub head_dim: Option<usize>,
    #[serde(default = "default_hidden_act")]
    pub hidden_act: String,
    #[serde(default = "default_max_position_embeddings")]
    pub max_position_embeddings: usize,
    #[serde(default = "default_initializer_range")]
    pub initializer_range: f64,
    #[serde(default = "default_rms_norm_eps")]
    pub rms_norm_eps: f64,
    #[serde(default = "default_true")]
    pub use_cache: bool,
    #[serde(default = "default_pretraining_tp")]
    pub pretraining_tp: usize,
    #[serde(default = "default_rope_theta")]
    pub rope_theta: f64,
    #[serde(default, deserialize_with = "deserialize_rope_scaling")]
    pub rope_scaling: Option<RopeScaling>,
    #[serde(default)]
    pub attention_bias: bool,
    #[serde(default)]
    pub attention_dropout: f64,
    #[serde(default)]
    pub mlp_bias: bool,
    #[serde(flatten)]
    pub base: BaseConfig,
}

impl LlamaConfig {
    /// Falls back to multi-head attention when unset.
    pub fn num_key_value_heads(&self) -> usize {
        self.num_key_value_heads.unwrap_or(self.num_attention_heads)
    }

    pub fn head_dim(&self) -> Option<usize> {
        self.head_dim
            .or_else(|| self.hidden_size.checked_div(self.num_attention_heads))
    }
}

impl Default for LlamaConfig {
    fn default() -> Self {
        Self {
            vocab_size: default_vocab_size(),
            hidden_size: default_hidden_size(),
            intermediate_size: default_intermediate_size(),
            num_hidden_layers: default_num_hidden_layers(),
            num_attention_heads: default_num_attention_heads(),
            num_key_value_heads: None,
            head_dim: None,
            hidden_act: default_hidden_act(),
            max_position_embeddings: default_max_position_embeddings(),
            initializer_range: default_initializer_range(),
            rms_norm_eps: default_rms_norm_eps(),
            use_cache: true,
            pretraining_tp: default_pretraining_tp(),
            rope_theta: default_rope_theta(),
            rope_scaling: None,
            attention_bias: false,
            attention_dropout: 0.0,
            mlp_bias: false,
            base: BaseConfig::default(),
        }
    }
}

impl ConfigRecord for LlamaConfig {
    const MODEL_TYPE: &'static str = "llama";
    const FIELDS: &'static [&'static str] = &[
        "vocab_size",
        "hidden_size",
        "intermediate_size",
        "num_hidden_layers",
        "num_attention_heads",
        "num_key_value_heads",
        "head_dim",
        "hidden_act",
        "max_position_embeddings",
        "initializer_range",
        "rms_norm_eps",
        "use_cache",
        "pretraining_tp",
        "rope_theta",
        "rope_scaling",
        "attention_bias",
        "attention_dropout",
        "mlp_bias",
    ];

    fn from_mapping(mapping: Mapping) -> Result<Self, ConfigError> {
        from_checked_mapping(mapping, |fields| Self::deserialize(fields))
    }
}

impl Serialize for LlamaConfig {
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

impl<'de> Deserialize<'de> for LlamaConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer)
    }
}
