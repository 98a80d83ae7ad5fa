use console::Style;
use esm2llama::{
    CompatibilityReport, ConfigError, ConfigRecord, Esm2LlamaInstructConfig,
    io,
};

/// Prints the compatibility report of a composite config. Returns whether
/// the sub-configs fit together.
pub fn handle_check(
    config_path: String
) -> Result<bool, Box<dyn std::error::Error>> {
    let config = io::load_any(&config_path)?;
    let model_type = config.model_type();
    let config = config.into_esm2llama_instruct().ok_or_else(|| {
        ConfigError::ModelTypeMismatch {
            expected: Esm2LlamaInstructConfig::MODEL_TYPE,
            found: model_type.to_string(),
        }
    })?;

    let report = CompatibilityReport::inspect(&config);
    if report.is_compatible() {
        println!("{}", Style::new().green().apply_to("compatible"));
        return Ok(true);
    }

    let issue_style = Style::new().yellow();
    for issue in &report.issues {
        println!("{}", issue_style.apply_to(format!("- {issue}")));
    }
    Ok(false)
}
