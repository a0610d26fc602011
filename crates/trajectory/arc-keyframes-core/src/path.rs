//! Trajectory paths between two points.
//!
//! Model:
//! - Endpoints within the degenerate box travel in a straight line.
//! - Endpoints sharing (nearly) the same x also travel in a straight line,
//!   since every factor of the quadratic fit's denominator is proportional
//!   to `target.x - source.x`.
//! - Everything else follows the parabola through `source`, the apex control
//!   point and `target`. The apex sits halfway along x at `source.y - elevation`.

use serde::{Deserialize, Serialize};

use crate::config::KeyframerConfig;
use crate::point::{lerp_f64, Point2D};

/// Coefficients of `y = a*x^2 + b*x + c`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct QuadraticFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticFit {
    /// Fit the unique parabola through three points with distinct x.
    ///
    /// Returns `None` when the denominator is zero or the result is not finite.
    pub fn through(p1: Point2D, p2: Point2D, p3: Point2D) -> Option<QuadraticFit> {
        let (x1, y1) = (p1.x, p1.y);
        let (x2, y2) = (p2.x, p2.y);
        let (x3, y3) = (p3.x, p3.y);

        let denom = (x1 - x2) * (x1 - x3) * (x2 - x3);
        if denom == 0.0 {
            return None;
        }

        let a = (x3 * (y2 - y1) + x2 * (y1 - y3) + x1 * (y3 - y2)) / denom;
        let b = (x3 * x3 * (y1 - y2) + x2 * x2 * (y3 - y1) + x1 * x1 * (y2 - y3)) / denom;
        let c = (x2 * x3 * (x2 - x3) * y1 + x3 * x1 * (x3 - x1) * y2 + x1 * x2 * (x1 - x2) * y3)
            / denom;

        let fit = QuadraticFit { a, b, c };
        fit.is_finite().then_some(fit)
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    Linear,
    Quadratic,
}

/// A resolved trajectory. Only constructed through [`TrajectoryPath::plan`]
/// or the explicit constructors below.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrajectoryPath {
    Linear {
        source: Point2D,
        target: Point2D,
    },
    /// `fit` maps `x - source.x` to `y - source.y`.
    Quadratic {
        source: Point2D,
        target: Point2D,
        fit: QuadraticFit,
    },
}

/// Apex control point for a quadratic trajectory.
#[inline]
pub fn control_midpoint(source: Point2D, target: Point2D, elevation: f64) -> Point2D {
    Point2D::new((source.x + target.x) / 2.0, source.y - elevation)
}

impl TrajectoryPath {
    pub fn linear(source: Point2D, target: Point2D) -> Self {
        TrajectoryPath::Linear { source, target }
    }

    /// Choose the path between `source` and `target` under `cfg`'s thresholds.
    pub fn plan(
        source: Point2D,
        target: Point2D,
        elevation: f64,
        cfg: &KeyframerConfig,
    ) -> TrajectoryPath {
        if !source.is_finite() || !target.is_finite() || !elevation.is_finite() {
            log::warn!(
                "non-finite trajectory input: source={source:?} target={target:?} elevation={elevation}"
            );
        }

        let dx = (source.x - target.x).abs();
        let dy = (source.y - target.y).abs();
        if dx < cfg.degenerate_extent && dy < cfg.degenerate_extent {
            return TrajectoryPath::linear(source, target);
        }

        // Relative to coordinate magnitude: far from the origin a small gap in
        // x is mostly rounding error.
        let scale = 1.0_f64.max(source.x.abs()).max(target.x.abs());
        if dx < cfg.singular_epsilon * scale {
            log::debug!(
                "vertical trajectory (dx={dx}, scale={scale}) has no quadratic fit; using linear path"
            );
            return TrajectoryPath::linear(source, target);
        }

        // Fit in coordinates relative to `source`, so the coefficients do not
        // depend on where the arc sits on screen.
        let mid = control_midpoint(source, target, elevation);
        let local = |p: Point2D| Point2D::new(p.x - source.x, p.y - source.y);
        match QuadraticFit::through(Point2D::new(0.0, 0.0), local(mid), local(target)) {
            Some(fit) => TrajectoryPath::Quadratic {
                source,
                target,
                fit,
            },
            None => {
                log::debug!(
                    "quadratic fit through {source:?}, {mid:?}, {target:?} is singular; using linear path"
                );
                TrajectoryPath::linear(source, target)
            }
        }
    }

    pub fn kind(&self) -> PathKind {
        match self {
            TrajectoryPath::Linear { .. } => PathKind::Linear,
            TrajectoryPath::Quadratic { .. } => PathKind::Quadratic,
        }
    }

    /// Evaluate the path at fraction `k` of the horizontal travel.
    ///
    /// `k == 0` and `k == 1` return the endpoints exactly.
    pub fn point_at(&self, k: f64) -> Point2D {
        match *self {
            TrajectoryPath::Linear { source, target } => Point2D::lerp(source, target, k),
            TrajectoryPath::Quadratic {
                source,
                target,
                fit,
            } => {
                if k == 0.0 {
                    return source;
                }
                if k == 1.0 {
                    return target;
                }
                let x = lerp_f64(source.x, target.x, k);
                let local_x = (target.x - source.x) * k;
                Point2D::new(x, source.y + fit.eval(local_x))
            }
        }
    }
}
