use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{
    BaseConfig, ConfigError, ConfigInput, ConfigRecord, EsmConfig,
    ExtraOptions, LlamaConfig, Mapping, ModalityAdapterConfig, normalize,
    record::{deserialize_record, serialize_record, take_model_type},
};

/// Reserved Llama-3 special token that marks where encoder embeddings are
/// spliced into the decoder input.
pub const DEFAULT_PLACEHOLDER_ID: i64 = 128003;

/// ESM-2 encoder, modality adapter and Llama decoder assembled into a
/// single instruction-following model.
///
/// Sub-configs are either absent or fully typed; raw mappings are resolved
/// during construction. No dimension is cross-checked between components,
/// see [`CompatibilityReport`](super::CompatibilityReport) for an advisory
/// check.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Esm2LlamaInstructConfig {
    #[serde(rename = "esm_config", serialize_with = "serialize_record")]
    pub encoder_config: Option<EsmConfig>,
    #[serde(serialize_with = "serialize_record")]
    pub adapter_config: Option<ModalityAdapterConfig>,
    #[serde(rename = "llama_config", serialize_with = "serialize_record")]
    pub decoder_config: Option<LlamaConfig>,
    pub placeholder_id: i64,
    #[serde(flatten)]
    pub base: BaseConfig,
}

impl Esm2LlamaInstructConfig {
    pub fn new(
        encoder_config: Option<ConfigInput<EsmConfig>>,
        adapter_config: Option<ConfigInput<ModalityAdapterConfig>>,
        decoder_config: Option<ConfigInput<LlamaConfig>>,
        placeholder_id: Option<i64>,
        extra_options: Option<ExtraOptions>,
    ) -> Result<Self, ConfigError> {
        let base = BaseConfig::from_options(
            extra_options.unwrap_or_default(),
            Self::MODEL_TYPE,
        )?;
        Ok(Self {
            encoder_config: normalize(encoder_config)?,
            adapter_config: normalize(adapter_config)?,
            decoder_config: normalize(decoder_config)?,
            placeholder_id: placeholder_id.unwrap_or(DEFAULT_PLACEHOLDER_ID),
            base,
        })
    }

    pub fn encoder_config(&self) -> Option<&EsmConfig> {
        self.encoder_config.as_ref()
    }

    pub fn adapter_config(&self) -> Option<&ModalityAdapterConfig> {
        self.adapter_config.as_ref()
    }

    pub fn decoder_config(&self) -> Option<&LlamaConfig> {
        self.decoder_config.as_ref()
    }

    pub fn placeholder_id(&self) -> i64 {
        self.placeholder_id
    }

    pub fn is_complete(&self) -> bool {
        self.encoder_config.is_some()
            && self.adapter_config.is_some()
            && self.decoder_config.is_some()
    }
}

impl ConfigRecord for Esm2LlamaInstructConfig {
    const MODEL_TYPE: &'static str = "esm2llama_instruct";
    const FIELDS: &'static [&'static str] = &[
        "esm_config",
        "encoder_config",
        "adapter_config",
        "llama_config",
        "decoder_config",
        "placeholder_id",
    ];

    fn from_mapping(mut mapping: Mapping) -> Result<Self, ConfigError> {
        take_model_type::<Self>(&mut mapping)?;

        let encoder_config = take_sub_config(
            &mut mapping,
            "esm_config",
            Some("encoder_config"),
        )?;
        let adapter_config =
            take_sub_config(&mut mapping, "adapter_config", None)?;
        let decoder_config = take_sub_config(
            &mut mapping,
            "llama_config",
            Some("decoder_config"),
        )?;
        let placeholder_id = match mapping.remove("placeholder_id") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_i64().ok_or_else(|| {
                ConfigError::InvalidField {
                    model_type: Self::MODEL_TYPE,
                    reason: format!(
                        "placeholder_id must be an integer, got {value}"
                    ),
                }
            })?),
        };

        Self::new(
            encoder_config,
            adapter_config,
            decoder_config,
            placeholder_id,
            Some(mapping),
        )
    }
}

impl<'de> Deserialize<'de> for Esm2LlamaInstructConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer)
    }
}

/// Removes a sub-config stored under `key` or its `alias`.
fn take_sub_config<T: ConfigRecord>(
    mapping: &mut Mapping,
    key: &str,
    alias: Option<&str>,
) -> Result<Option<ConfigInput<T>>, ConfigError> {
    let aliased = alias.and_then(|alias| mapping.remove(alias));
    let value = match (mapping.remove(key), aliased) {
        (Some(_), Some(_)) => {
            return Err(ConfigError::InvalidField {
                model_type: Esm2LlamaInstructConfig::MODEL_TYPE,
                reason: format!(
                    "both `{key}` and `{}` are set",
                    alias.unwrap_or(key)
                ),
            });
        },
        (value, None) | (None, value) => value,
    };

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(sub_mapping)) => {
            Ok(Some(ConfigInput::Mapping(sub_mapping)))
        },
        Some(other) => Err(ConfigError::InvalidField {
            model_type: Esm2LlamaInstructConfig::MODEL_TYPE,
            reason: format!("`{key}` must be an object or null, got {other}"),
        }),
    }
}
