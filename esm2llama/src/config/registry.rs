//! Routes a persisted mapping to the record type named by its `model_type`.

use serde_json::Value;

use super::{
    ConfigError, ConfigRecord, Esm2LlamaInstructConfig, EsmConfig,
    LlamaConfig, Mapping, ModalityAdapterConfig, ModelType,
    record::MODEL_TYPE_KEY,
};

#[derive(Debug, PartialEq, Clone)]
pub enum AnyConfig {
    Esm(EsmConfig),
    Llama(LlamaConfig),
    ModalityAdapter(ModalityAdapterConfig),
    Esm2LlamaInstruct(Esm2LlamaInstructConfig),
}

impl AnyConfig {
    pub fn model_type(&self) -> ModelType {
        match self {
            AnyConfig::Esm(_) => ModelType::Esm,
            AnyConfig::Llama(_) => ModelType::Llama,
            AnyConfig::ModalityAdapter(_) => ModelType::ModalityAdapter,
            AnyConfig::Esm2LlamaInstruct(_) => ModelType::Esm2LlamaInstruct,
        }
    }

    pub fn to_mapping(&self) -> Result<Mapping, ConfigError> {
        match self {
            AnyConfig::Esm(config) => config.to_mapping(),
            AnyConfig::Llama(config) => config.to_mapping(),
            AnyConfig::ModalityAdapter(config) => config.to_mapping(),
            AnyConfig::Esm2LlamaInstruct(config) => config.to_mapping(),
        }
    }

    pub fn as_esm2llama_instruct(&self) -> Option<&Esm2LlamaInstructConfig> {
        match self {
            AnyConfig::Esm2LlamaInstruct(config) => Some(config),
            _ => None,
        }
    }

    pub fn into_esm2llama_instruct(self) -> Option<Esm2LlamaInstructConfig> {
        match self {
            AnyConfig::Esm2LlamaInstruct(config) => Some(config),
            _ => None,
        }
    }
}

/// Builds the record registered under `model_type`.
pub fn construct(
    model_type: ModelType,
    mapping: Mapping,
) -> Result<AnyConfig, ConfigError> {
    log::debug!("Constructing {model_type} config");
    Ok(match model_type {
        ModelType::Esm => AnyConfig::Esm(EsmConfig::from_mapping(mapping)?),
        ModelType::Llama => {
            AnyConfig::Llama(LlamaConfig::from_mapping(mapping)?)
        },
        ModelType::ModalityAdapter => AnyConfig::ModalityAdapter(
            ModalityAdapterConfig::from_mapping(mapping)?,
        ),
        ModelType::Esm2LlamaInstruct => AnyConfig::Esm2LlamaInstruct(
            Esm2LlamaInstructConfig::from_mapping(mapping)?,
        ),
    })
}

/// Reads the discriminator and dispatches to [`construct`].
pub fn from_mapping(mapping: Mapping) -> Result<AnyConfig, ConfigError> {
    let model_type = match mapping.get(MODEL_TYPE_KEY) {
        Some(Value::String(tag)) => tag.parse::<ModelType>()?,
        Some(other) => {
            return Err(ConfigError::UnknownModelType(other.to_string()));
        },
        None => {
            return Err(ConfigError::MissingField(MODEL_TYPE_KEY.to_string()));
        },
    };
    construct(model_type, mapping)
}

pub fn from_value(value: Value) -> Result<AnyConfig, ConfigError> {
    match value {
        Value::Object(mapping) => from_mapping(mapping),
        _ => Err(ConfigError::ExpectedMapping),
    }
}
