//! Core traits for the encoder-decoder architecture.
//!
//! This module defines the fundamental contract that sequence-to-sequence
//! models implement: an [`Encoder`] that turns a source-side input into an
//! intermediate representation, and a [`Decoder`] that derives an initial
//! state from that representation and then produces target-side output from
//! it. The [`EncoderDecoder`](crate::model::EncoderDecoder) composite wires
//! one of each together.
//!
//! The design principles are:
//! 1.  **Abstract by Construction**: Neither trait has default method bodies.
//!     A type that claims a capability without implementing it is rejected by
//!     the compiler; there is no instantiable base type that fails at runtime.
//! 2.  **Stateless Models, Stateful State Values**: Models are immutable
//!     (`&self`) during inference. Everything that evolves across decode
//!     steps lives in the decoder's associated `State` value, which is passed
//!     mutably (`&mut Self::State`). `init_state` is the only way to obtain
//!     one.
//! 3.  **Opaque Representations**: Encoder output and decoder state are
//!     associated types. This layer never inspects them; it only guarantees
//!     that the encoder's output is what the paired decoder's `init_state`
//!     consumes.
//! 4.  **Synchronous Call Chain**: A forward pass is an ordinary blocking
//!     call with no suspension points. Batching and parallelism across calls
//!     belong to the execution environment, not to this contract.
//!
//! Conventional [`EncoderOutput`] and [`DecoderOutput`] containers are
//! provided for implementations that want the standard hidden-state layout,
//! but nothing in the traits requires them.

use anyhow::Result;
use ndarray::{Array3, Array4};

use crate::architecture::ModelArchitecture;
use crate::context::AuxContext;

/// Supported computation backends.
///
/// A model is typically initialized for a specific device and will use that
/// device for all its computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    /// Execute computations on the CPU.
    Cpu,
    /// Execute computations on the GPU via WGPU.
    Wgpu,
}

impl Device {
    /// Returns `true` for GPU-backed devices.
    pub fn is_gpu(&self) -> bool {
        matches!(self, Device::Wgpu)
    }
}

/// A base marker trait for all models in the library.
///
/// Provides a common interface for identifying the model's computation device
/// and its architectural role, so pipeline assembly can validate a model
/// before using it. It requires `Send + Sync` to ensure models can be safely
/// shared across threads, even though each forward pass is synchronous.
pub trait Model: Send + Sync {
    /// Returns the computation device this model instance is configured to use.
    fn device(&self) -> Device;

    /// Returns the architectural role this model fills.
    fn architecture(&self) -> ModelArchitecture;
}

/// The interface for an encoder model.
///
/// An encoder consumes a complete source-side input plus whatever auxiliary
/// context the caller supplies, and produces an intermediate representation
/// for a paired decoder. The shape of both `Input` and `Output` is entirely
/// the implementation's business.
pub trait Encoder: Model {
    type Input;
    type Output;

    /// Performs a forward pass through the encoder.
    ///
    /// # Arguments
    /// * `input` - The source-side input representation.
    /// * `aux` - Auxiliary context (padding mask, sequence lengths). An
    ///   implementation that needs none of it simply ignores the argument.
    ///
    /// # Returns
    /// The encoder's intermediate representation, consumable by the paired
    /// decoder's [`Decoder::init_state`].
    fn forward(&self, input: &Self::Input, aux: &AuxContext) -> Result<Self::Output>;
}

/// The interface for a decoder model in an encoder-decoder architecture.
///
/// A decoder exposes two operations: deriving an initial state from encoder
/// output, and transforming a target-side input against that state. Relative
/// to a single inference pass the state is either uninitialized (before
/// `init_state`) or initialized; `init_state` is the only transition between
/// the two, and `forward` may run any number of times while the state value
/// lives.
pub trait Decoder: Model {
    type Input;
    type Output;
    /// The encoder representation this decoder knows how to consume. A
    /// composite requires this to equal the paired encoder's `Output`.
    type EncoderOutput;
    /// Evolving inference state threaded through successive `forward` calls.
    type State;

    /// Derives a fresh decoder state from encoder output.
    ///
    /// # Arguments
    /// * `enc_outputs` - The paired encoder's output for this pass.
    /// * `aux` - The same auxiliary context the encoder saw, unmodified.
    fn init_state(&self, enc_outputs: &Self::EncoderOutput, aux: &AuxContext)
        -> Result<Self::State>;

    /// Performs one forward pass through the decoder.
    ///
    /// The model itself stays immutable; anything that must survive into the
    /// next step (recurrent hidden state, attention KV entries) is mutated in
    /// place through `state`.
    fn forward(&self, input: &Self::Input, state: &mut Self::State) -> Result<Self::Output>;
}

/// The standard output from an encoder model.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderOutput<T = f32> {
    /// The final hidden states of the encoder.
    /// Shape: `(batch_size, sequence_length, hidden_size)`.
    pub last_hidden_state: Array3<T>,
}

/// The standard output from a decoder model.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoderOutput<T = f32> {
    /// The final hidden states of the decoder.
    /// Shape: `(batch_size, sequence_length, hidden_size)`.
    pub last_hidden_state: Array3<T>,
    /// Per-layer Key-Value tensors produced by this pass, for
    /// implementations that carry an attention cache in their state.
    pub past_key_values: Option<Vec<(Array4<T>, Array4<T>)>>,
}
