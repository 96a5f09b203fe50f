//! Encoder-decoder architecture core.
//!
//! Defines the contract sequence-to-sequence models are built against: the
//! [`Encoder`] and [`Decoder`] traits and the [`EncoderDecoder`] composite
//! that runs the fixed encode → init-state → decode pipeline. Concrete layer
//! math, weight loading and generation loops live in model crates; this crate
//! is the seam between them.

pub mod architecture;
pub mod config;
pub mod context;
pub mod model;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-exports
pub use architecture::{ArchitectureError, ModelArchitecture};
pub use config::{ConfigError, ModelConfig, Seq2SeqConfig};
pub use context::AuxContext;
pub use model::EncoderDecoder;
pub use traits::{Decoder, DecoderOutput, Device, Encoder, EncoderOutput, Model};
