//! Arc Keyframes Core (engine-agnostic)
//!
//! Generates keyframes along a parabolic arc between two points, for use by an
//! external animation driver that plays them back at a uniform time step.
//! Nearby endpoints and vertical motion fall back to a straight line.

pub mod config;
pub mod error;
pub mod keyframer;
pub mod path;
pub mod point;
pub mod sequence;

// Re-exports for consumers (adapters)
pub use config::{KeyframerConfig, KEYFRAME_COUNT};
pub use error::KeyframerError;
pub use keyframer::{generate, Keyframer};
pub use path::{control_midpoint, PathKind, QuadraticFit, TrajectoryPath};
pub use point::Point2D;
pub use sequence::KeyframeSequence;
