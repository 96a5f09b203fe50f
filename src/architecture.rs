//! Architectural roles of sequence models and role validation.
//!
//! Each [`Model`](crate::traits::Model) reports a [`ModelArchitecture`] so
//! that pipeline assembly can check a model fits the slot it is being put in
//! (for example, rejecting an encoder-only model where generation is
//! required) before any forward pass runs.

use std::fmt;

use thiserror::Error;

/// Distinguishes the architectural role of a sequence model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelArchitecture {
    /// Encoder-only model (e.g., BERT-style representation models).
    Encoder,
    /// Decoder-only (causal / autoregressive) model (e.g., GPT-style).
    Decoder,
    /// Encoder-decoder (seq2seq) model (e.g., T5, BART, MarianMT).
    EncoderDecoder,
}

impl ModelArchitecture {
    /// Whether this architecture can produce an intermediate representation
    /// from a source sequence.
    pub fn can_encode(&self) -> bool {
        matches!(
            self,
            ModelArchitecture::Encoder | ModelArchitecture::EncoderDecoder
        )
    }

    /// Whether this architecture can generate target-side output.
    pub fn can_generate(&self) -> bool {
        matches!(
            self,
            ModelArchitecture::Decoder | ModelArchitecture::EncoderDecoder
        )
    }

    /// Human-readable name used in logs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ModelArchitecture::Encoder => "encoder-only",
            ModelArchitecture::Decoder => "decoder-only",
            ModelArchitecture::EncoderDecoder => "encoder-decoder",
        }
    }

    /// Validate that this architecture matches the role a pipeline requires.
    pub fn require(self, required: ModelArchitecture) -> Result<(), ArchitectureError> {
        if self == required {
            Ok(())
        } else {
            Err(ArchitectureError::Mismatch {
                required,
                actual: self,
            })
        }
    }
}

impl fmt::Display for ModelArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised when a model is placed in a role it cannot fill.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArchitectureError {
    /// The model's architecture does not match the required role.
    #[error("model is {actual}, but this pipeline requires {required}")]
    Mismatch {
        required: ModelArchitecture,
        actual: ModelArchitecture,
    },
}
