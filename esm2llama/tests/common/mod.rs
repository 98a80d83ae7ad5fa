#![allow(dead_code)]
use esm2llama::{
    BaseConfig, Esm2LlamaInstructConfig, EsmConfig, LlamaConfig,
    ModalityAdapterConfig, RopeScaling, TokenIds,
};

pub const PROTEIN_LLAMA_CONFIG: &str = r#"
{
    "_name_or_path": "esm2llama-instruct-8b",
    "architectures": ["Esm2LlamaInstructForCausalLM"],
    "model_type": "esm2llama_instruct",
    "transformers_version": "4.46.0",
    "placeholder_id": 128003,
    "esm_config": {
        "_name_or_path": "facebook/esm2_t33_650M_UR50D",
        "model_type": "esm",
        "vocab_size": 33,
        "mask_token_id": 32,
        "pad_token_id": 1,
        "hidden_size": 1280,
        "num_hidden_layers": 33,
        "num_attention_heads": 20,
        "intermediate_size": 5120,
        "hidden_dropout_prob": 0.0,
        "attention_probs_dropout_prob": 0.0,
        "layer_norm_eps": 1e-05,
        "position_embedding_type": "rotary",
        "emb_layer_norm_before": false,
        "token_dropout": true
    },
    "adapter_config": {
        "model_type": "modality_adapter",
        "input_dim": 1280,
        "intermediate_dim": 2048,
        "output_dim": 4096,
        "dropout_rate": 0.3
    },
    "llama_config": {
        "_name_or_path": "meta-llama/Meta-Llama-3.1-8B-Instruct",
        "model_type": "llama",
        "vocab_size": 128256,
        "hidden_size": 4096,
        "intermediate_size": 14336,
        "num_hidden_layers": 32,
        "num_attention_heads": 32,
        "num_key_value_heads": 8,
        "max_position_embeddings": 131072,
        "rms_norm_eps": 1e-05,
        "rope_theta": 500000.0,
        "rope_scaling": {
            "rope_type": "llama3",
            "factor": 8.0,
            "low_freq_factor": 1.0,
            "high_freq_factor": 4.0,
            "original_max_position_embeddings": 8192
        },
        "bos_token_id": 128000,
        "eos_token_id": [128001, 128008, 128009],
        "torch_dtype": "bfloat16"
    }
}
"#;

/// Same checkpoint as [`PROTEIN_LLAMA_CONFIG`], written with every generic
/// option the reference framework emits for each sub-config.
pub const PROTEIN_LLAMA_FULL_CONFIG: &str = r#"
{
    "esm_config": {
        "vocab_size": 33,
        "mask_token_id": 32,
        "hidden_size": 1280,
        "num_hidden_layers": 33,
        "num_attention_heads": 20,
        "intermediate_size": 5120,
        "hidden_act": "gelu",
        "hidden_dropout_prob": 0.0,
        "attention_probs_dropout_prob": 0.0,
        "max_position_embeddings": 1026,
        "initializer_range": 0.02,
        "layer_norm_eps": 1e-05,
        "position_embedding_type": "rotary",
        "use_cache": true,
        "emb_layer_norm_before": false,
        "token_dropout": true,
        "is_folding_model": false,
        "esmfold_config": null,
        "vocab_list": null,
        "return_dict": true,
        "output_hidden_states": false,
        "output_attentions": false,
        "torchscript": false,
        "use_bfloat16": false,
        "tf_legacy_loss": false,
        "pruned_heads": {},
        "tie_word_embeddings": true,
        "chunk_size_feed_forward": 0,
        "is_encoder_decoder": false,
        "is_decoder": false,
        "cross_attention_hidden_size": null,
        "add_cross_attention": false,
        "tie_encoder_decoder": false,
        "max_length": 20,
        "min_length": 0,
        "do_sample": false,
        "early_stopping": false,
        "num_beams": 1,
        "num_beam_groups": 1,
        "diversity_penalty": 0.0,
        "temperature": 1.0,
        "top_k": 50,
        "top_p": 1.0,
        "typical_p": 1.0,
        "repetition_penalty": 1.0,
        "length_penalty": 1.0,
        "no_repeat_ngram_size": 0,
        "encoder_no_repeat_ngram_size": 0,
        "bad_words_ids": null,
        "num_return_sequences": 1,
        "output_scores": false,
        "return_dict_in_generate": false,
        "forced_bos_token_id": null,
        "forced_eos_token_id": null,
        "remove_invalid_values": false,
        "exponential_decay_length_penalty": null,
        "suppress_tokens": null,
        "begin_suppress_tokens": null,
        "finetuning_task": null,
        "id2label": {
            "0": "LABEL_0",
            "1": "LABEL_1"
        },
        "label2id": {
            "LABEL_0": 0,
            "LABEL_1": 1
        },
        "tokenizer_class": null,
        "prefix": null,
        "sep_token_id": null,
        "decoder_start_token_id": null,
        "task_specific_params": null,
        "problem_type": null,
        "transformers_version": "4.46.0",
        "_name_or_path": "facebook/esm2_t33_650M_UR50D",
        "architectures": [
            "EsmForMaskedLM"
        ],
        "torch_dtype": "float32",
        "bos_token_id": null,
        "pad_token_id": 1,
        "eos_token_id": null,
        "model_type": "esm"
    },
    "adapter_config": {
        "input_dim": 1280,
        "intermediate_dim": 2048,
        "output_dim": 4096,
        "dropout_rate": 0.3,
        "return_dict": true,
        "output_hidden_states": false,
        "output_attentions": false,
        "torchscript": false,
        "use_bfloat16": false,
        "tf_legacy_loss": false,
        "pruned_heads": {},
        "tie_word_embeddings": true,
        "chunk_size_feed_forward": 0,
        "is_encoder_decoder": false,
        "is_decoder": false,
        "cross_attention_hidden_size": null,
        "add_cross_attention": false,
        "tie_encoder_decoder": false,
        "max_length": 20,
        "min_length": 0,
        "do_sample": false,
        "early_stopping": false,
        "num_beams": 1,
        "num_beam_groups": 1,
        "diversity_penalty": 0.0,
        "temperature": 1.0,
        "top_k": 50,
        "top_p": 1.0,
        "typical_p": 1.0,
        "repetition_penalty": 1.0,
        "length_penalty": 1.0,
        "no_repeat_ngram_size": 0,
        "encoder_no_repeat_ngram_size": 0,
        "bad_words_ids": null,
        "num_return_sequences": 1,
        "output_scores": false,
        "return_dict_in_generate": false,
        "forced_bos_token_id": null,
        "forced_eos_token_id": null,
        "remove_invalid_values": false,
        "exponential_decay_length_penalty": null,
        "suppress_tokens": null,
        "begin_suppress_tokens": null,
        "finetuning_task": null,
        "id2label": {
            "0": "LABEL_0",
            "1": "LABEL_1"
        },
        "label2id": {
            "LABEL_0": 0,
            "LABEL_1": 1
        },
        "tokenizer_class": null,
        "prefix": null,
        "sep_token_id": null,
        "decoder_start_token_id": null,
        "task_specific_params": null,
        "problem_type": null,
        "transformers_version": "4.46.0",
        "_name_or_path": "",
        "architectures": null,
        "torch_dtype": null,
        "bos_token_id": null,
        "pad_token_id": null,
        "eos_token_id": null,
        "model_type": "modality_adapter"
    },
    "llama_config": {
        "vocab_size": 128256,
        "max_position_embeddings": 131072,
        "hidden_size": 4096,
        "intermediate_size": 14336,
        "num_hidden_layers": 32,
        "num_attention_heads": 32,
        "num_key_value_heads": 8,
        "hidden_act": "silu",
        "initializer_range": 0.02,
        "rms_norm_eps": 1e-05,
        "pretraining_tp": 1,
        "use_cache": true,
        "rope_theta": 500000.0,
        "rope_scaling": {
            "factor": 8.0,
            "high_freq_factor": 4.0,
            "low_freq_factor": 1.0,
            "original_max_position_embeddings": 8192,
            "rope_type": "llama3"
        },
        "attention_bias": false,
        "attention_dropout": 0.0,
        "mlp_bias": false,
        "head_dim": 128,
        "return_dict": true,
        "output_hidden_states": false,
        "output_attentions": false,
        "torchscript": false,
        "use_bfloat16": false,
        "tf_legacy_loss": false,
        "pruned_heads": {},
        "tie_word_embeddings": false,
        "chunk_size_feed_forward": 0,
        "is_encoder_decoder": false,
        "is_decoder": false,
        "cross_attention_hidden_size": null,
        "add_cross_attention": false,
        "tie_encoder_decoder": false,
        "max_length": 20,
        "min_length": 0,
        "do_sample": false,
        "early_stopping": false,
        "num_beams": 1,
        "num_beam_groups": 1,
        "diversity_penalty": 0.0,
        "temperature": 1.0,
        "top_k": 50,
        "top_p": 1.0,
        "typical_p": 1.0,
        "repetition_penalty": 1.0,
        "length_penalty": 1.0,
        "no_repeat_ngram_size": 0,
        "encoder_no_repeat_ngram_size": 0,
        "bad_words_ids": null,
        "num_return_sequences": 1,
        "output_scores": false,
        "return_dict_in_generate": false,
        "forced_bos_token_id": null,
        "forced_eos_token_id": null,
        "remove_invalid_values": false,
        "exponential_decay_length_penalty": null,
        "suppress_tokens": null,
        "begin_suppress_tokens": null,
        "finetuning_task": null,
        "id2label": {
            "0": "LABEL_0",
            "1": "LABEL_1"
        },
        "label2id": {
            "LABEL_0": 0,
            "LABEL_1": 1
        },
        "tokenizer_class": null,
        "prefix": null,
        "sep_token_id": null,
        "decoder_start_token_id": null,
        "task_specific_params": null,
        "problem_type": null,
        "transformers_version": "4.46.0",
        "_name_or_path": "meta-llama/Meta-Llama-3.1-8B-Instruct",
        "architectures": [
            "LlamaForCausalLM"
        ],
        "torch_dtype": "bfloat16",
        "bos_token_id": 128000,
        "pad_token_id": null,
        "eos_token_id": [
            128001,
            128008,
            128009
        ],
        "model_type": "llama"
    },
    "placeholder_id": 128003,
    "return_dict": true,
    "output_hidden_states": false,
    "output_attentions": false,
    "torchscript": false,
    "use_bfloat16": false,
    "tf_legacy_loss": false,
    "pruned_heads": {},
    "tie_word_embeddings": true,
    "chunk_size_feed_forward": 0,
    "is_encoder_decoder": false,
    "is_decoder": false,
    "cross_attention_hidden_size": null,
    "add_cross_attention": false,
    "tie_encoder_decoder": false,
    "max_length": 20,
    "min_length": 0,
    "do_sample": false,
    "early_stopping": false,
    "num_beams": 1,
    "num_beam_groups": 1,
    "diversity_penalty": 0.0,
    "temperature": 1.0,
    "top_k": 50,
    "top_p": 1.0,
    "typical_p": 1.0,
    "repetition_penalty": 1.0,
    "length_penalty": 1.0,
    "no_repeat_ngram_size": 0,
    "encoder_no_repeat_ngram_size": 0,
    "bad_words_ids": null,
    "num_return_sequences": 1,
    "output_scores": false,
    "return_dict_in_generate": false,
    "forced_bos_token_id": null,
    "forced_eos_token_id": null,
    "remove_invalid_values": false,
    "exponential_decay_length_penalty": null,
    "suppress_tokens": null,
    "begin_suppress_tokens": null,
    "finetuning_task": null,
    "id2label": {
        "0": "LABEL_0",
        "1": "LABEL_1"
    },
    "label2id": {
        "LABEL_0": 0,
        "LABEL_1": 1
    },
    "tokenizer_class": null,
    "prefix": null,
    "sep_token_id": null,
    "decoder_start_token_id": null,
    "task_specific_params": null,
    "problem_type": null,
    "transformers_version": "4.46.0",
    "_name_or_path": "esm2llama-instruct-8b",
    "architectures": [
        "Esm2LlamaInstructForCausalLM"
    ],
    "torch_dtype": "bfloat16",
    "bos_token_id": null,
    "pad_token_id": null,
    "eos_token_id": null,
    "model_type": "esm2llama_instruct"
}
"#;

pub fn esm2_650m() -> EsmConfig {
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
            name_or_path: Some("facebook/esm2_t33_650M_UR50D".to_string()),
            pad_token_id: Some(1),
            ..BaseConfig::default()
        },
        ..EsmConfig::default()
    }
}

pub fn adapter() -> ModalityAdapterConfig {
    ModalityAdapterConfig::new(1280, 2048, 4096, None, None).unwrap()
}

pub fn llama_3_1_8b() -> LlamaConfig {
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
            name_or_path: Some(
                "meta-llama/Meta-Llama-3.1-8B-Instruct".to_string(),
            ),
            bos_token_id: Some(128000),
            eos_token_id: Some(TokenIds::Multiple(vec![128001, 128008, 128009])),
            torch_dtype: Some("bfloat16".to_string()),
            ..BaseConfig::default()
        },
        ..LlamaConfig::default()
    }
}

pub fn protein_llama() -> Esm2LlamaInstructConfig {
    Esm2LlamaInstructConfig {
        encoder_config: Some(esm2_650m()),
        adapter_config: Some(adapter()),
        decoder_config: Some(llama_3_1_8b()),
        placeholder_id: 128003,
        base: BaseConfig {
            name_or_path: Some("esm2llama-instruct-8b".to_string()),
            architectures: Some(vec![
                "Esm2LlamaInstructForCausalLM".to_string(),
            ]),
            transformers_version: Some("4.46.0".to_string()),
            ..BaseConfig::default()
        },
    }
}
