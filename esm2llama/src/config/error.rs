use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Unknown field `{field}` for {model_type} config")]
    UnknownField {
        model_type: &'static str,
        field: String,
    },
    #[error("Invalid {model_type} config: {reason}")]
    InvalidField {
        model_type: &'static str,
        reason: String,
    },
    #[error("Expected {expected} config, found model_type `{found}`")]
    ModelTypeMismatch {
        expected: &'static str,
        found: String,
    },
    #[error("Unknown model type: {0}")]
    UnknownModelType(String),
    #[error("Config must be a JSON object")]
    ExpectedMapping,
    #[error("Unable to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
