//! Keyframe sequences and uniform-time resampling.
//!
//! Keyframe `i` of an `n`-point sequence is stamped at `i / (n - 1)`.
//! Resampling finds the segment containing the requested stamp and blends
//! its two keyframes linearly.

use serde::Serialize;

use crate::path::{PathKind, TrajectoryPath};
use crate::point::Point2D;

/// Keyframes sampled from one [`TrajectoryPath`]. Always holds at least two
/// points; only built through [`KeyframeSequence::from_path`].
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct KeyframeSequence {
    kind: PathKind,
    points: Vec<Point2D>,
}

impl KeyframeSequence {
    /// Sample `path` at `count` evenly spaced fractions. `count` below 2 is
    /// raised to 2 so both endpoints are always present.
    pub fn from_path(path: &TrajectoryPath, count: usize) -> Self {
        let count = count.max(2);
        let last = (count - 1) as f64;
        let points = (0..count)
            .map(|i| path.point_at(i as f64 / last))
            .collect();
        Self {
            kind: path.kind(),
            points,
        }
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept alongside [`KeyframeSequence::len`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Point2D {
        self.points[0]
    }

    pub fn last(&self) -> Point2D {
        self.points[self.points.len() - 1]
    }

    /// Normalized time stamp of each keyframe.
    pub fn stamps(&self) -> Vec<f64> {
        let n = self.points.len();
        let last = (n - 1) as f64;
        (0..n).map(|i| i as f64 / last).collect()
    }

    /// Position at normalized time `u`, clamped to `[0, 1]`.
    pub fn sample(&self, u: f64) -> Point2D {
        let (i0, i1, lt) = find_segment(self.points.len(), u);
        if i0 == i1 {
            return self.points[i0];
        }
        Point2D::lerp(self.points[i0], self.points[i1], lt)
    }
}

/// Segment `[i, i+1]` containing `u` and the local fraction within it.
/// Values at or beyond either end collapse to that endpoint.
fn find_segment(n: usize, u: f64) -> (usize, usize, f64) {
    let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
    if u <= 0.0 {
        return (0, 0, 0.0);
    }
    if u >= 1.0 {
        return (n - 1, n - 1, 0.0);
    }
    let scaled = u * (n - 1) as f64;
    let i = (scaled.floor() as usize).min(n - 2);
    let lt = (scaled - i as f64).clamp(0.0, 1.0);
    (i, i + 1, lt)
}
