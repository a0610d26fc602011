//! Keyframe generation along a [`TrajectoryPath`].

use crate::config::{KeyframerConfig, KEYFRAME_COUNT};
use crate::error::Result;
use crate::path::TrajectoryPath;
use crate::point::Point2D;
use crate::sequence::KeyframeSequence;

/// Produces equally time-spaced keyframes between two points.
#[derive(Clone, Debug, Default)]
pub struct Keyframer {
    cfg: KeyframerConfig,
}

impl Keyframer {
    pub fn new(cfg: KeyframerConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &KeyframerConfig {
        &self.cfg
    }

    pub fn plan(&self, source: Point2D, target: Point2D, elevation: f64) -> TrajectoryPath {
        TrajectoryPath::plan(source, target, elevation, &self.cfg)
    }

    pub fn keyframes(&self, source: Point2D, target: Point2D, elevation: f64) -> KeyframeSequence {
        let path = self.plan(source, target, elevation);
        KeyframeSequence::from_path(&path, self.cfg.sample_count)
    }
}

/// Generate the canonical ten keyframes from `source` to `target`.
///
/// Sample `i` sits at fraction `i / 9` of the horizontal travel. The first
/// sample is `source` and the last is `target`. Finite inputs never produce
/// NaN or infinite samples; non-finite inputs are passed through unchecked.
pub fn generate(source: Point2D, target: Point2D, elevation: f64) -> [Point2D; KEYFRAME_COUNT] {
    let path = TrajectoryPath::plan(source, target, elevation, &KeyframerConfig::default());
    let last = (KEYFRAME_COUNT - 1) as f64;
    std::array::from_fn(|i| path.point_at(i as f64 / last))
}
