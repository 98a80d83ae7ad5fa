use std::fmt;

use super::Esm2LlamaInstructConfig;

#[derive(Debug, PartialEq, Clone)]
pub enum CompatibilityIssue {
    MissingComponent(&'static str),
    EncoderAdapterMismatch {
        encoder_hidden_size: usize,
        adapter_input_dim: usize,
    },
    AdapterDecoderMismatch {
        adapter_output_dim: usize,
        decoder_hidden_size: usize,
    },
    ZeroAdapterDimension(&'static str),
    DropoutRateOutOfRange(f64),
    PlaceholderOutOfVocabulary {
        placeholder_id: i64,
        vocab_size: usize,
    },
}

impl fmt::Display for CompatibilityIssue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            CompatibilityIssue::MissingComponent(component) => {
                write!(f, "{component} config is not set")
            },
            CompatibilityIssue::EncoderAdapterMismatch {
                encoder_hidden_size,
                adapter_input_dim,
            } => write!(
                f,
                "encoder hidden_size {encoder_hidden_size} does not match adapter input_dim {adapter_input_dim}"
            ),
            CompatibilityIssue::AdapterDecoderMismatch {
                adapter_output_dim,
                decoder_hidden_size,
            } => write!(
                f,
                "adapter output_dim {adapter_output_dim} does not match decoder hidden_size {decoder_hidden_size}"
            ),
            CompatibilityIssue::ZeroAdapterDimension(field) => {
                write!(f, "adapter {field} is zero")
            },
            CompatibilityIssue::DropoutRateOutOfRange(rate) => {
                write!(f, "adapter dropout_rate {rate} is outside [0, 1)")
            },
            CompatibilityIssue::PlaceholderOutOfVocabulary {
                placeholder_id,
                vocab_size,
            } => write!(
                f,
                "placeholder_id {placeholder_id} is outside the decoder vocabulary of {vocab_size} tokens"
            ),
        }
    }
}

/// Advisory check of the assumptions the model builder makes about how the
/// sub-configs fit together. Construction never consults it.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct CompatibilityReport {
    pub issues: Vec<CompatibilityIssue>,
}

impl CompatibilityReport {
    pub fn inspect(config: &Esm2LlamaInstructConfig) -> Self {
        let mut issues = Vec::new();

        let encoder = config.encoder_config();
        let adapter = config.adapter_config();
        let decoder = config.decoder_config();

        if encoder.is_none() {
            issues.push(CompatibilityIssue::MissingComponent("encoder"));
        }
        if adapter.is_none() {
            issues.push(CompatibilityIssue::MissingComponent("adapter"));
        }
        if decoder.is_none() {
            issues.push(CompatibilityIssue::MissingComponent("decoder"));
        }

        if let Some(adapter) = adapter {
            for (field, dim) in [
                ("input_dim", adapter.input_dim),
                ("intermediate_dim", adapter.intermediate_dim),
                ("output_dim", adapter.output_dim),
            ] {
                if dim == 0 {
                    issues
                        .push(CompatibilityIssue::ZeroAdapterDimension(field));
                }
            }
            if !(0.0..1.0).contains(&adapter.dropout_rate) {
                issues.push(CompatibilityIssue::DropoutRateOutOfRange(
                    adapter.dropout_rate,
                ));
            }
        }

        if let (Some(encoder), Some(adapter)) = (encoder, adapter) {
            if encoder.hidden_size != adapter.input_dim {
                issues.push(CompatibilityIssue::EncoderAdapterMismatch {
                    encoder_hidden_size: encoder.hidden_size,
                    adapter_input_dim: adapter.input_dim,
                });
            }
        }

        if let (Some(adapter), Some(decoder)) = (adapter, decoder) {
            if adapter.output_dim != decoder.hidden_size {
                issues.push(CompatibilityIssue::AdapterDecoderMismatch {
                    adapter_output_dim: adapter.output_dim,
                    decoder_hidden_size: decoder.hidden_size,
                });
            }
        }

        if let Some(decoder) = decoder {
            let in_vocabulary = usize::try_from(config.placeholder_id)
                .is_ok_and(|id| id < decoder.vocab_size);
            if !in_vocabulary {
                issues.push(CompatibilityIssue::PlaceholderOutOfVocabulary {
                    placeholder_id: config.placeholder_id,
                    vocab_size: decoder.vocab_size,
                });
            }
        }

        Self {
            issues,
        }
    }

    pub fn is_compatible(&self) -> bool {
        self.issues.is_empty()
    }
}
