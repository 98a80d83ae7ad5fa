use super::{ConfigError, ConfigRecord, Mapping};

/// A sub-config as supplied by the caller: either raw key/value entries
/// (e.g. read from a persisted file) or an already-built record.
#[derive(Debug, PartialEq, Clone)]
pub enum ConfigInput<T> {
    Mapping(Mapping),
    Typed(T),
}

impl<T> From<T> for ConfigInput<T> {
    fn from(config: T) -> Self {
        ConfigInput::Typed(config)
    }
}

impl<T: ConfigRecord> ConfigInput<T> {
    pub fn into_typed(self) -> Result<T, ConfigError> {
        match self {
            ConfigInput::Mapping(mapping) => {
                log::debug!(
                    "Building {} config from {} mapping entries",
                    T::MODEL_TYPE,
                    mapping.len()
                );
                T::from_mapping(mapping)
            },
            ConfigInput::Typed(config) => {
                log::trace!("Using prebuilt {} config", T::MODEL_TYPE);
                Ok(config)
            },
        }
    }
}

/// Resolves an optional sub-config to its typed form. Typed records are
/// moved through untouched and `None` stays `None`.
pub fn normalize<T: ConfigRecord>(
    input: Option<ConfigInput<T>>
) -> Result<Option<T>, ConfigError> {
    input.map(ConfigInput::into_typed).transpose()
}
