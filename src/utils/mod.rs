//! Utility modules

pub mod masks;

pub use masks::{causal_mask, padding_mask};
