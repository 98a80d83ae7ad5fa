//! Reading and writing configs as `config.json` documents.

use std::{
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::{AnyConfig, ConfigError, ConfigRecord, registry};

pub const CONFIG_FILE_NAME: &str = "config.json";

fn record_from_value<T: ConfigRecord>(
    value: Value
) -> Result<T, ConfigError> {
    match value {
        Value::Object(mapping) => T::from_mapping(mapping),
        _ => Err(ConfigError::ExpectedMapping),
    }
}

/// Accepts either a config file or a model folder containing one.
pub fn resolve_config_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_dir() {
        path.join(CONFIG_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

fn read_value(path: &Path) -> Result<Value, ConfigError> {
    log::debug!("Reading config from {}", path.display());
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub fn from_json_str<T: ConfigRecord>(json: &str) -> Result<T, ConfigError> {
    record_from_value(serde_json::from_str(json)?)
}

pub fn to_json_string<T: ConfigRecord>(
    config: &T
) -> Result<String, ConfigError> {
    let mapping = config.to_mapping()?;
    Ok(serde_json::to_string_pretty(&Value::Object(mapping))?)
}

pub fn from_json_file<T: ConfigRecord>(
    path: impl AsRef<Path>
) -> Result<T, ConfigError> {
    record_from_value(read_value(path.as_ref())?)
}

pub fn to_json_file<T: ConfigRecord>(
    config: &T,
    path: impl AsRef<Path>,
) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let mut json = to_json_string(config)?;
    json.push('\n');
    fs::write(path, json)?;
    log::debug!("Wrote {} config to {}", T::MODEL_TYPE, path.display());
    Ok(())
}

/// Loads `config.json` from a model folder.
pub fn from_pretrained<T: ConfigRecord>(
    model_path: impl AsRef<Path>
) -> Result<T, ConfigError> {
    from_json_file(model_path.as_ref().join(CONFIG_FILE_NAME))
}

/// Writes `config.json` into a model folder, creating it if needed.
pub fn save_pretrained<T: ConfigRecord>(
    config: &T,
    model_path: impl AsRef<Path>,
) -> Result<PathBuf, ConfigError> {
    let model_path = model_path.as_ref();
    fs::create_dir_all(model_path)?;
    let config_path = model_path.join(CONFIG_FILE_NAME);
    to_json_file(config, &config_path)?;
    Ok(config_path)
}

/// Loads a config of whichever type its `model_type` names.
pub fn load_any(path: impl AsRef<Path>) -> Result<AnyConfig, ConfigError> {
    registry::from_value(read_value(&resolve_config_path(path))?)
}
