use std::path::PathBuf;

use esm2llama::{
    BaseConfig, Esm2LlamaInstructConfig, EsmConfig, LlamaConfig,
    ModalityAdapterConfig, RopeScaling, TokenIds, io,
};

pub struct InitOptions {
    pub placeholder_id: Option<i64>,
    pub input_dim: usize,
    pub intermediate_dim: usize,
    pub output_dim: usize,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            placeholder_id: None,
            input_dim: 1280,
            intermediate_dim: 2048,
            output_dim: 4096,
        }
    }
}

fn esm2_encoder() -> EsmConfig {
    EsmConfig {
        vocab_size: Some(33),
        mask_token_id: Some(32),
        hidden_size: 1280,
        num_hidden_layers: 33,
        num_attention_heads: 20,
        intermediate_size: 5120,
        hidden_dropout_prob: 0.0,
        attention_probs_dropout_prob: 0.0,
        layer_norm_eps: 1e-5,
        position_embedding_type: "rotary".to_string(),
        emb_layer_norm_before: Some(false),
        token_dropout: true,
        base: BaseConfig {
            pad_token_id: Some(1),
            ..BaseConfig::default()
        },
        ..EsmConfig::default()
    }
}

fn llama_decoder() -> LlamaConfig {
    LlamaConfig {
        vocab_size: 128256,
        hidden_size: 4096,
        intermediate_size: 14336,
        num_hidden_layers: 32,
        num_attention_heads: 32,
        num_key_value_heads: Some(8),
        max_position_embeddings: 131072,
        rms_norm_eps: 1e-5,
        rope_theta: 500000.0,
        rope_scaling: Some(RopeScaling::Llama3 {
            factor: 8.0,
            low_freq_factor: 1.0,
            high_freq_factor: 4.0,
            original_max_position_embeddings: 8192,
        }),
        base: BaseConfig {
            bos_token_id: Some(128000),
            eos_token_id: Some(TokenIds::Multiple(vec![
                128001, 128008, 128009,
            ])),
            ..BaseConfig::default()
        },
        ..LlamaConfig::default()
    }
}

/// ESM-2 650M encoder and Llama 3.1 8B decoder joined by the requested
/// adapter.
pub fn build_default_config(
    options: &InitOptions
) -> Result<Esm2LlamaInstructConfig, esm2llama::ConfigError> {
    let adapter = ModalityAdapterConfig::new(
        options.input_dim,
        options.intermediate_dim,
        options.output_dim,
        None,
        None,
    )?;
    Esm2LlamaInstructConfig::new(
        Some(esm2_encoder().into()),
        Some(adapter.into()),
        Some(llama_decoder().into()),
        options.placeholder_id,
        None,
    )
}

pub fn handle_init(
    output_path: String,
    options: InitOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_default_config(&options)?;
    let config_path =
        io::save_pretrained(&config, PathBuf::from(output_path))?;
    println!("Wrote {}", config_path.display());
    Ok(())
}
