//! A "prelude" for the `edgeseq` crate, re-exporting the most common traits and types.
//!
//! This allows users to easily import the essentials with a single `use` statement:
//! `use edgeseq::prelude::*;`

pub use crate::architecture::{ArchitectureError, ModelArchitecture};
pub use crate::config::{ModelConfig, Seq2SeqConfig};
pub use crate::context::AuxContext;
pub use crate::model::EncoderDecoder;
pub use crate::traits::{
    // Core Traits
    Model,
    Encoder,
    Decoder,

    // Data Structures
    EncoderOutput,
    DecoderOutput,

    // Backend Enum
    Device,
};
