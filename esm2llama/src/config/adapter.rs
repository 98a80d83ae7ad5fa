use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    BaseConfig, ConfigError, ConfigRecord, ExtraOptions, Mapping,
    record::{deserialize_record, from_checked_mapping},
};

fn default_dropout_rate() -> f64 {
    0.3
}

/// Two-layer non-linear projection from encoder to decoder embedding space.
/// Dimensions are not checked against each other or against the
/// surrounding sub-models.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(remote = "Self")]
pub struct ModalityAdapterConfig {
    pub input_dim: usize,
    pub intermediate_dim: usize,
    pub output_dim: usize,
    #[serde(default = "default_dropout_rate")]
    pub dropout_rate: f64,
    #[serde(flatten)]
    pub base: BaseConfig,
}

impl ModalityAdapterConfig {
    pub fn new(
        input_dim: usize,
        intermediate_dim: usize,
        output_dim: usize,
        dropout_rate: Option<f64>,
        extra_options: Option<ExtraOptions>,
    ) -> Result<Self, ConfigError> {
        let base = BaseConfig::from_options(
            extra_options.unwrap_or_default(),
            Self::MODEL_TYPE,
        )?;
        Ok(Self {
            input_dim,
            intermediate_dim,
            output_dim,
            dropout_rate: dropout_rate.unwrap_or_else(default_dropout_rate),
            base,
        })
    }
}

impl ConfigRecord for ModalityAdapterConfig {
    const MODEL_TYPE: &'static str = "modality_adapter";
    const FIELDS: &'static [&'static str] =
        &["input_dim", "intermediate_dim", "output_dim", "dropout_rate"];

    fn from_mapping(mapping: Mapping) -> Result<Self, ConfigError> {
        from_checked_mapping(mapping, |fields| Self::deserialize(fields))
    }
}

impl Serialize for ModalityAdapterConfig {
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

impl<'de> Deserialize<'de> for ModalityAdapterConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer)
    }
}
