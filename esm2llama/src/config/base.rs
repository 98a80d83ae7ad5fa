use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ConfigError, Mapping};

/// Generic options forwarded unchanged to [`BaseConfig`] at construction.
pub type ExtraOptions = Mapping;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum TokenIds {
    Single(i64),
    Multiple(Vec<i64>),
}

impl TokenIds {
    pub fn contains(
        &self,
        token_id: i64,
    ) -> bool {
        match self {
            TokenIds::Single(id) => *id == token_id,
            TokenIds::Multiple(ids) => ids.contains(&token_id),
        }
    }
}

/// Options every config record accepts alongside its own fields, as written
/// by the reference framework for any pretrained config. Unset options are
/// omitted from the persisted form.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct BaseConfig {
    #[serde(
        rename = "_name_or_path",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub name_or_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architectures: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torch_dtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformers_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bos_token_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eos_token_id: Option<TokenIds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad_token_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep_token_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoder_start_token_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie_word_embeddings: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_decoder: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_encoder_decoder: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_cross_attention: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie_encoder_decoder: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_attention_hidden_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_hidden_states: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_attentions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_dict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torchscript: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_bfloat16: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tf_legacy_loss: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pruned_heads: Option<BTreeMap<String, Vec<usize>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_size_feed_forward: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finetuning_task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id2label: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label2id: Option<BTreeMap<String, i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenizer_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_specific_params: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
    #[serde(
        rename = "_attn_implementation_autoset",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attn_implementation_autoset: Option<bool>,
    #[serde(flatten)]
    pub generation: GenerationDefaults,
}

/// Legacy generation parameters still carried in every config's mapping.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct GenerationDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub do_sample: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_stopping: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_beams: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_beam_groups: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversity_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_repeat_ngram_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder_no_repeat_ngram_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad_words_ids: Option<Vec<Vec<i64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_return_sequences: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_scores: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_dict_in_generate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_bos_token_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_eos_token_id: Option<TokenIds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_invalid_values: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponential_decay_length_penalty: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_tokens: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_suppress_tokens: Option<Vec<i64>>,
}

impl GenerationDefaults {
    pub const FIELDS: &'static [&'static str] = &[
        "max_length",
        "min_length",
        "do_sample",
        "early_stopping",
        "num_beams",
        "num_beam_groups",
        "diversity_penalty",
        "temperature",
        "top_k",
        "top_p",
        "typical_p",
        "repetition_penalty",
        "length_penalty",
        "no_repeat_ngram_size",
        "encoder_no_repeat_ngram_size",
        "bad_words_ids",
        "num_return_sequences",
        "output_scores",
        "return_dict_in_generate",
        "forced_bos_token_id",
        "forced_eos_token_id",
        "remove_invalid_values",
        "exponential_decay_length_penalty",
        "suppress_tokens",
        "begin_suppress_tokens",
    ];
}

impl BaseConfig {
    pub const FIELDS: &'static [&'static str] = &[
        "_name_or_path",
        "architectures",
        "torch_dtype",
        "transformers_version",
        "bos_token_id",
        "eos_token_id",
        "pad_token_id",
        "sep_token_id",
        "decoder_start_token_id",
        "tie_word_embeddings",
        "is_decoder",
        "is_encoder_decoder",
        "add_cross_attention",
        "tie_encoder_decoder",
        "cross_attention_hidden_size",
        "output_hidden_states",
        "output_attentions",
        "return_dict",
        "torchscript",
        "use_bfloat16",
        "tf_legacy_loss",
        "pruned_heads",
        "chunk_size_feed_forward",
        "finetuning_task",
        "id2label",
        "label2id",
        "tokenizer_class",
        "prefix",
        "task_specific_params",
        "problem_type",
        "_attn_implementation_autoset",
    ];

    pub fn accepts_field(field: &str) -> bool {
        Self::FIELDS.contains(&field)
            || GenerationDefaults::FIELDS.contains(&field)
    }

    /// Builds the base record from generic options on behalf of the record
    /// tagged `owner`, which is named in any resulting error.
    pub fn from_options(
        options: ExtraOptions,
        owner: &'static str,
    ) -> Result<Self, ConfigError> {
        if let Some(field) =
            options.keys().find(|key| !Self::accepts_field(key))
        {
            return Err(ConfigError::UnknownField {
                model_type: owner,
                field: field.clone(),
            });
        }
        serde_json::from_value(Value::Object(options)).map_err(|error| {
            ConfigError::InvalidField {
                model_type: owner,
                reason: error.to_string(),
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
