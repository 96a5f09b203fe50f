use ndarray::Array2;

/// Create a causal attention mask where position i can only attend to positions 0..=i
/// Returns a [seq_len, seq_len] mask with 1.0 for allowed positions, 0.0 for masked
///
/// ```
/// let mask = edgeseq::utils::causal_mask(2);
/// assert_eq!(mask[[0, 1]], 0.0);
/// assert_eq!(mask[[1, 0]], 1.0);
/// ```
pub fn causal_mask(seq_len: usize) -> Array2<f32> {
    let mut mask = Array2::zeros((seq_len, seq_len));
    for i in 0..seq_len {
        for j in 0..=i {
            mask[[i, j]] = 1.0;
        }
    }
    mask
}

/// Create a padding mask from per-sequence valid lengths.
/// Returns a [batch, max_len] mask with 1.0 for valid positions, 0.0 for padding.
/// Lengths beyond `max_len` are clamped.
pub fn padding_mask(lengths: &[usize], max_len: usize) -> Array2<f32> {
    let mut mask = Array2::zeros((lengths.len(), max_len));
    for (i, &len) in lengths.iter().enumerate() {
        for j in 0..len.min(max_len) {
            mask[[i, j]] = 1.0;
        }
    }
    mask
}
