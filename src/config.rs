//! Model configuration layer.
//!
//! Concrete models describe their hyperparameters with configuration structs
//! deserialized from a `config.json`. This module provides the [`ModelConfig`]
//! marker those structs implement, plus [`Seq2SeqConfig`], the standard
//! hyperparameter set for an encoder-decoder model.

use std::any::Any;

use serde::Deserialize;
use thiserror::Error;

/// A marker trait for model configuration structs.
///
/// This allows for generic model loading and initialization from
/// configuration data.
pub trait ModelConfig: Send + Sync + Any {}

/// Hyperparameters of an encoder-decoder model, deserialized from a
/// `config.json` file.
#[derive(Debug, Clone, Deserialize)]
pub struct Seq2SeqConfig {
    pub vocab_size: usize,
    pub d_model: usize,
    pub encoder_layers: usize,
    pub decoder_layers: usize,
    pub encoder_attention_heads: usize,
    pub decoder_attention_heads: usize,
    #[serde(default = "default_layer_norm_epsilon")]
    pub layer_norm_epsilon: f32,
    #[serde(default)]
    pub scale_embedding: bool,
}

fn default_layer_norm_epsilon() -> f32 {
    1e-5
}

impl ModelConfig for Seq2SeqConfig {}

/// Errors raised while loading or validating a model configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse model config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model config: {0}")]
    Invalid(String),
}

impl Seq2SeqConfig {
    /// Parse and validate a configuration from `config.json` contents.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.vocab_size == 0 || self.d_model == 0 {
            return Err(ConfigError::Invalid(
                "vocab_size and d_model must be non-zero".into(),
            ));
        }
        if self.encoder_layers == 0 || self.decoder_layers == 0 {
            return Err(ConfigError::Invalid(
                "encoder_layers and decoder_layers must be non-zero".into(),
            ));
        }
        for (name, heads) in [
            ("encoder_attention_heads", self.encoder_attention_heads),
            ("decoder_attention_heads", self.decoder_attention_heads),
        ] {
            if heads == 0 || self.d_model % heads != 0 {
                return Err(ConfigError::Invalid(format!(
                    "d_model ({}) must split evenly across {} ({})",
                    self.d_model, name, heads
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shape of a distilbart-style config.json, trimmed to the fields we read.
    const BART_JSON: &str = r#"{
        "vocab_size": 50264,
        "d_model": 1024,
        "encoder_layers": 12,
        "decoder_layers": 6,
        "encoder_attention_heads": 16,
        "decoder_attention_heads": 16,
        "scale_embedding": false
    }"#;

    #[test]
    fn test_from_json_parses_bart_shape() {
        let config = Seq2SeqConfig::from_json(BART_JSON).unwrap();
        assert_eq!(config.d_model, 1024);
        assert_eq!(config.encoder_layers, 12);
        assert_eq!(config.decoder_layers, 6);
        assert_eq!(config.layer_norm_epsilon, 1e-5); // defaulted
        assert!(!config.scale_embedding);
    }

    #[test]
    fn test_from_json_rejects_uneven_heads() {
        let json = r#"{
            "vocab_size": 1000,
            "d_model": 100,
            "encoder_layers": 2,
            "decoder_layers": 2,
            "encoder_attention_heads": 16,
            "decoder_attention_heads": 16
        }"#;
        let err = Seq2SeqConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("encoder_attention_heads"));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = Seq2SeqConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_zero_layers() {
        let json = r#"{
            "vocab_size": 1000,
            "d_model": 64,
            "encoder_layers": 0,
            "decoder_layers": 2,
            "encoder_attention_heads": 8,
            "decoder_attention_heads": 8
        }"#;
        let err = Seq2SeqConfig::from_json(json).unwrap_err();
        assert!(err.to_string().contains("must be non-zero"));
    }
}
