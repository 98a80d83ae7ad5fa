use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    ConfigError, ConfigRecord, Esm2LlamaInstructConfig, EsmConfig,
    LlamaConfig, ModalityAdapterConfig,
};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone)]
pub enum ModelType {
    #[serde(rename = "esm")]
    Esm,
    #[serde(rename = "llama")]
    Llama,
    #[serde(rename = "modality_adapter")]
    ModalityAdapter,
    #[serde(rename = "esm2llama_instruct")]
    Esm2LlamaInstruct,
}

impl ModelType {
    pub const ALL: [ModelType; 4] = [
        ModelType::Esm,
        ModelType::Llama,
        ModelType::ModalityAdapter,
        ModelType::Esm2LlamaInstruct,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Esm => EsmConfig::MODEL_TYPE,
            ModelType::Llama => LlamaConfig::MODEL_TYPE,
            ModelType::ModalityAdapter => ModalityAdapterConfig::MODEL_TYPE,
            ModelType::Esm2LlamaInstruct => Esm2LlamaInstructConfig::MODEL_TYPE,
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = ConfigError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model_type| model_type.as_str() == tag)
            .ok_or_else(|| ConfigError::UnknownModelType(tag.to_string()))
    }
}
