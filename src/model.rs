//! The encoder-decoder composite.
//!
//! [`EncoderDecoder`] owns one [`Encoder`] and one [`Decoder`] and runs the
//! fixed two-stage pipeline: encode the source input, derive the initial
//! decoder state from the encoder's output, then decode the target input
//! against that state. Pairings are checked at the type level: the decoder
//! must declare the encoder's output as the representation it consumes.

use anyhow::Result;

use crate::architecture::ModelArchitecture;
use crate::context::AuxContext;
use crate::traits::{Decoder, Device, Encoder, Model};

/// A complete sequence-to-sequence model assembled from two halves.
///
/// Both halves are injected at construction and owned exclusively for the
/// composite's lifetime; the composite never mutates them, and any
/// statefulness lives in the decoder's `State` value created per pass.
///
/// # Example
///
/// ```ignore
/// use edgeseq::{AuxContext, EncoderDecoder};
///
/// let model = EncoderDecoder::new(my_encoder, my_decoder);
/// let aux = AuxContext::new().with_sequence_lengths(vec![7, 4]);
/// let output = model.forward(&source_ids, &target_ids, &aux)?;
/// ```
pub struct EncoderDecoder<E, D> {
    encoder: E,
    decoder: D,
}

impl<E, D> EncoderDecoder<E, D>
where
    E: Encoder,
    D: Decoder<EncoderOutput = E::Output>,
{
    /// Assemble a composite from an encoder and a compatible decoder.
    pub fn new(encoder: E, decoder: D) -> Self {
        Self { encoder, decoder }
    }

    /// The encoder half.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// The decoder half.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Run the full pipeline for one pass.
    ///
    /// The three sub-calls execute strictly in sequence: encoder forward,
    /// decoder state initialization, decoder forward. `aux` is handed
    /// unmodified to the first two. A failure in any sub-call propagates
    /// unchanged to the caller; once the encoder fails, the decoder is never
    /// invoked.
    pub fn forward(
        &self,
        enc_input: &E::Input,
        dec_input: &D::Input,
        aux: &AuxContext,
    ) -> Result<D::Output> {
        log::trace!("running encoder forward pass");
        let enc_outputs = self.encoder.forward(enc_input, aux)?;

        log::trace!("initializing decoder state from encoder outputs");
        let mut state = self.decoder.init_state(&enc_outputs, aux)?;

        log::trace!("running decoder forward pass");
        self.decoder.forward(dec_input, &mut state)
    }
}

impl<E, D> Model for EncoderDecoder<E, D>
where
    E: Encoder,
    D: Decoder<EncoderOutput = E::Output>,
{
    /// The composite reports its encoder's device; both halves are expected
    /// to live on the same one.
    fn device(&self) -> Device {
        self.encoder.device()
    }

    fn architecture(&self) -> ModelArchitecture {
        ModelArchitecture::EncoderDecoder
    }
}
