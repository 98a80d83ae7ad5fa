use serde::{
    Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned,
};
use serde_json::Value;

use super::{BaseConfig, ConfigError};

/// Key/value form of a config, as found in `config.json`.
pub type Mapping = serde_json::Map<String, Value>;

pub(crate) const MODEL_TYPE_KEY: &str = "model_type";

/// A config record that can be built from, and written back to, its mapping
/// form. `MODEL_TYPE` is the discriminator persisted under `model_type`.
pub trait ConfigRecord: Serialize + DeserializeOwned + Sized {
    const MODEL_TYPE: &'static str;

    /// Keys accepted in addition to the [`BaseConfig`] options.
    const FIELDS: &'static [&'static str];

    fn accepts_field(field: &str) -> bool {
        field == MODEL_TYPE_KEY
            || Self::FIELDS.contains(&field)
            || BaseConfig::accepts_field(field)
    }

    /// Spreads the mapping's entries as named fields. Absent optional fields
    /// take their defaults; unrecognized keys are rejected.
    fn from_mapping(mapping: Mapping) -> Result<Self, ConfigError>;

    fn to_mapping(&self) -> Result<Mapping, ConfigError> {
        match serde_json::to_value(self)? {
            Value::Object(mut mapping) => {
                mapping.insert(
                    MODEL_TYPE_KEY.to_string(),
                    Value::String(Self::MODEL_TYPE.to_string()),
                );
                Ok(mapping)
            },
            _ => Err(ConfigError::ExpectedMapping),
        }
    }
}

/// Strips the discriminator after checking it against `T::MODEL_TYPE`.
pub(crate) fn take_model_type<T: ConfigRecord>(
    mapping: &mut Mapping
) -> Result<(), ConfigError> {
    match mapping.remove(MODEL_TYPE_KEY) {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(found)) if found == T::MODEL_TYPE => Ok(()),
        Some(Value::String(found)) => Err(ConfigError::ModelTypeMismatch {
            expected: T::MODEL_TYPE,
            found,
        }),
        Some(other) => Err(ConfigError::ModelTypeMismatch {
            expected: T::MODEL_TYPE,
            found: other.to_string(),
        }),
    }
}

fn checked_mapping<T: ConfigRecord>(
    mut mapping: Mapping
) -> Result<Mapping, ConfigError> {
    take_model_type::<T>(&mut mapping)?;
    if let Some(field) = mapping.keys().find(|key| !T::accepts_field(key)) {
        return Err(ConfigError::UnknownField {
            model_type: T::MODEL_TYPE,
            field: field.clone(),
        });
    }
    Ok(mapping)
}

/// Checks `mapping`, then hands the remaining entries to the record's
/// field-level deserializer.
pub(crate) fn from_checked_mapping<T, F>(
    mapping: Mapping,
    deserialize_fields: F,
) -> Result<T, ConfigError>
where
    T: ConfigRecord,
    F: FnOnce(Value) -> Result<T, serde_json::Error>,
{
    let mapping = checked_mapping::<T>(mapping)?;
    deserialize_fields(Value::Object(mapping)).map_err(|error| {
        ConfigError::InvalidField {
            model_type: T::MODEL_TYPE,
            reason: error.to_string(),
        }
    })
}

/// `Deserialize` body shared by every record: serde callers get the same
/// checks as [`ConfigRecord::from_mapping`].
pub(crate) fn deserialize_record<'de, T, D>(
    deserializer: D
) -> Result<T, D::Error>
where
    T: ConfigRecord,
    D: Deserializer<'de>,
{
    let mapping = Mapping::deserialize(deserializer)?;
    T::from_mapping(mapping).map_err(serde::de::Error::custom)
}

/// Writes a nested record in its tagged mapping form, or `null`.
pub(crate) fn serialize_record<T, S>(
    record: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: ConfigRecord,
    S: Serializer,
{
    match record {
        Some(record) => record
            .to_mapping()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer),
        None => serializer.serialize_none(),
    }
}
