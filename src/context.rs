//! Typed auxiliary context passed alongside primary inputs.
//!
//! Sequence-to-sequence calls commonly carry extra per-batch information next
//! to the token inputs themselves: a padding mask, the valid length of each
//! sequence. [`AuxContext`] gives those a typed home. All fields are optional
//! and `None` means "not supplied"; an implementation reads the fields it
//! recognizes and ignores the rest. The composite forwards the context
//! unmodified to both the encoder and decoder-state initialization.

use ndarray::Array2;

use crate::utils::masks::padding_mask;

/// Auxiliary inputs for a single encoder-decoder pass.
///
/// ```
/// use edgeseq::AuxContext;
///
/// let aux = AuxContext::new().with_sequence_lengths(vec![5, 3]);
/// assert!(!aux.is_empty());
/// assert_eq!(AuxContext::default(), AuxContext::new());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuxContext {
    /// Attention/padding mask over the source batch.
    /// Shape: `(batch_size, sequence_length)`, `1.0` for valid positions.
    pub attention_mask: Option<Array2<f32>>,

    /// Number of valid (non-padding) tokens per sequence in the batch.
    pub sequence_lengths: Option<Vec<usize>>,
}

impl AuxContext {
    /// An empty context: no auxiliary inputs supplied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an explicit attention mask.
    pub fn with_attention_mask(mut self, mask: Array2<f32>) -> Self {
        self.attention_mask = Some(mask);
        self
    }

    /// Attach per-sequence valid lengths.
    pub fn with_sequence_lengths(mut self, lengths: Vec<usize>) -> Self {
        self.sequence_lengths = Some(lengths);
        self
    }

    /// Check if any auxiliary inputs are set.
    pub fn is_empty(&self) -> bool {
        self.attention_mask.is_none() && self.sequence_lengths.is_none()
    }

    /// Merge with another context. Values from `other` take precedence.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            attention_mask: other
                .attention_mask
                .clone()
                .or_else(|| self.attention_mask.clone()),
            sequence_lengths: other
                .sequence_lengths
                .clone()
                .or_else(|| self.sequence_lengths.clone()),
        }
    }

    /// Resolve the padding mask for a batch of width `max_len`.
    ///
    /// An explicit `attention_mask` wins; otherwise one is derived from
    /// `sequence_lengths`. Returns `None` when neither is available.
    pub fn padding_mask(&self, max_len: usize) -> Option<Array2<f32>> {
        if let Some(mask) = &self.attention_mask {
            return Some(mask.clone());
        }
        self.sequence_lengths
            .as_ref()
            .map(|lengths| padding_mask(lengths, max_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_default_is_empty() {
        let aux = AuxContext::default();
        assert!(aux.is_empty());
        assert!(aux.padding_mask(4).is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let aux = AuxContext::new()
            .with_attention_mask(arr2(&[[1.0, 1.0, 0.0]]))
            .with_sequence_lengths(vec![2]);
        assert!(!aux.is_empty());
        assert_eq!(aux.sequence_lengths, Some(vec![2]));
    }

    #[test]
    fn test_merge_other_takes_precedence() {
        let base = AuxContext::new().with_sequence_lengths(vec![4, 4]);
        let update = AuxContext::new().with_sequence_lengths(vec![2, 3]);

        let merged = base.merge(&update);
        assert_eq!(merged.sequence_lengths, Some(vec![2, 3]));

        let merged = base.merge(&AuxContext::new());
        assert_eq!(merged.sequence_lengths, Some(vec![4, 4])); // from base
    }

    #[test]
    fn test_explicit_mask_wins_over_lengths() {
        let explicit = arr2(&[[1.0, 0.0, 0.0]]);
        let aux = AuxContext::new()
            .with_attention_mask(explicit.clone())
            .with_sequence_lengths(vec![3]);
        assert_eq!(aux.padding_mask(3), Some(explicit));
    }

    #[test]
    fn test_mask_derived_from_lengths() {
        let aux = AuxContext::new().with_sequence_lengths(vec![2, 3]);
        let mask = aux.padding_mask(3).unwrap();
        assert_eq!(mask, arr2(&[[1.0, 1.0, 0.0], [1.0, 1.0, 1.0]]));
    }
}
