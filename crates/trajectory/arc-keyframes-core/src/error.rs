//! Error types for keyframer configuration.
//!
//! Generating keyframes never fails; only building a [`crate::Keyframer`]
//! from an invalid [`crate::KeyframerConfig`] does.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyframerError {
    #[error("sample_count must be at least 2, got {count}")]
    TooFewSamples { count: usize },

    #[error("degenerate_extent must be finite and non-negative, got {value}")]
    InvalidExtent { value: f64 },

    #[error("singular_epsilon must be finite and non-negative, got {value}")]
    InvalidEpsilon { value: f64 },

    #[error("keyframer config parse error: {0}")]
    Config(String),
}

pub type Result<T, E = KeyframerError> = std::result::Result<T, E>;
