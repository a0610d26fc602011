//! 2D point value type used for trajectory endpoints and keyframes.

use serde::{Deserialize, Serialize};

/// A pair of coordinates. Plain value, no identity beyond `(x, y)`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `a * (1 - k) + b * k`.
    ///
    /// Written in this form (rather than `a + (b - a) * k`) so that `k == 0`
    /// yields `a` and `k == 1` yields `b` exactly.
    #[inline]
    pub fn lerp(a: Point2D, b: Point2D, k: f64) -> Point2D {
        Point2D {
            x: lerp_f64(a.x, b.x, k),
            y: lerp_f64(a.y, b.y, k),
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(v: [f64; 2]) -> Self {
        Point2D::new(v[0], v[1])
    }
}

#[inline]
pub(crate) fn lerp_f64(a: f64, b: f64, k: f64) -> f64 {
    a * (1.0 - k) + b * k
}
