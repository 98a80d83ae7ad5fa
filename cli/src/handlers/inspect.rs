use console::Style;
use esm2llama::{
    AnyConfig, Esm2LlamaInstructConfig, EsmConfig, LlamaConfig,
    ModalityAdapterConfig, io,
};

fn describe_esm(config: &EsmConfig) -> String {
    format!(
        "{} layers, hidden_size {}, {} heads, {} position embeddings",
        config.num_hidden_layers,
        config.hidden_size,
        config.num_attention_heads,
        config.position_embedding_type
    )
}

fn describe_adapter(config: &ModalityAdapterConfig) -> String {
    format!(
        "{} -> {} -> {}, dropout {}",
        config.input_dim,
        config.intermediate_dim,
        config.output_dim,
        config.dropout_rate
    )
}

fn describe_llama(config: &LlamaConfig) -> String {
    format!(
        "{} layers, hidden_size {}, {}/{} heads, vocab {}",
        config.num_hidden_layers,
        config.hidden_size,
        config.num_attention_heads,
        config.num_key_value_heads(),
        config.vocab_size
    )
}

fn describe_composite(config: &Esm2LlamaInstructConfig) -> Vec<String> {
    let unset = || "not set".to_string();
    vec![
        format!(
            "encoder: {}",
            config.encoder_config().map(describe_esm).unwrap_or_else(unset)
        ),
        format!(
            "adapter: {}",
            config
                .adapter_config()
                .map(describe_adapter)
                .unwrap_or_else(unset)
        ),
        format!(
            "decoder: {}",
            config.decoder_config().map(describe_llama).unwrap_or_else(unset)
        ),
        format!("placeholder_id: {}", config.placeholder_id()),
    ]
}

/// One line per component of the loaded config.
pub fn describe(config: &AnyConfig) -> Vec<String> {
    match config {
        AnyConfig::Esm(config) => vec![describe_esm(config)],
        AnyConfig::Llama(config) => vec![describe_llama(config)],
        AnyConfig::ModalityAdapter(config) => vec![describe_adapter(config)],
        AnyConfig::Esm2LlamaInstruct(config) => describe_composite(config),
    }
}

pub fn handle_inspect(
    config_path: String
) -> Result<(), Box<dyn std::error::Error>> {
    let config = io::load_any(&config_path)?;

    let title_style = Style::new().bold();
    println!("{}", title_style.apply_to(config.model_type()));
    for line in describe(&config) {
        println!("  {line}");
    }
    Ok(())
}
