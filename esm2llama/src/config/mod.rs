mod adapter;
mod base;
mod compatibility;
mod error;
mod esm;
mod esm2llama_instruct;
mod input;
pub mod io;
mod llama;
mod model_type;
mod record;
pub mod registry;

pub use adapter::ModalityAdapterConfig;
pub use base::{BaseConfig, ExtraOptions, GenerationDefaults, TokenIds};
pub use compatibility::{CompatibilityIssue, CompatibilityReport};
pub use error::ConfigError;
pub use esm::EsmConfig;
pub use esm2llama_instruct::{DEFAULT_PLACEHOLDER_ID, Esm2LlamaInstructConfig};
pub use input::{ConfigInput, normalize};
pub use llama::{LlamaConfig, RopeScaling};
pub use model_type::ModelType;
pub use record::{ConfigRecord, Mapping};
pub use registry::AnyConfig;
