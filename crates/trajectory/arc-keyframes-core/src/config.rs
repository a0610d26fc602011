//! Keyframer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{KeyframerError, Result};

/// Number of keyframes produced by [`crate::generate`].
pub const KEYFRAME_COUNT: usize = 10;

/// Endpoints closer than this on both axes are joined by a straight line.
pub const DEFAULT_DEGENERATE_EXTENT: f64 = 5.0;

/// Relative horizontal gap under which the quadratic fit is treated as singular.
pub const DEFAULT_SINGULAR_EPSILON: f64 = 1e-6;

/// Sizing and thresholds for a [`crate::Keyframer`].
///
/// Missing fields fall back to their defaults when deserializing, so
/// `{ "sample_count": 24 }` is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyframerConfig {
    /// Number of keyframes emitted, including both endpoints.
    pub sample_count: usize,
    /// Endpoints closer than this on both axes (strict `<`) travel in a
    /// straight line.
    pub degenerate_extent: f64,
    /// Relative x-gap under which the quadratic fit counts as singular. The
    /// threshold is `singular_epsilon * max(1, |source.x|, |target.x|)`.
    pub singular_epsilon: f64,
}

impl Default for KeyframerConfig {
    fn default() -> Self {
        Self {
            sample_count: KEYFRAME_COUNT,
            degenerate_extent: DEFAULT_DEGENERATE_EXTENT,
            singular_epsilon: DEFAULT_SINGULAR_EPSILON,
        }
    }
}

impl KeyframerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(KeyframerError::TooFewSamples {
                count: self.sample_count,
            });
        }
        if !self.degenerate_extent.is_finite() || self.degenerate_extent < 0.0 {
            return Err(KeyframerError::InvalidExtent {
                value: self.degenerate_extent,
            });
        }
        if !self.singular_epsilon.is_finite() || self.singular_epsilon < 0.0 {
            return Err(KeyframerError::InvalidEpsilon {
                value: self.singular_epsilon,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: KeyframerConfig =
            serde_json::from_str(json).map_err(|e| KeyframerError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
