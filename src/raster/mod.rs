//! Scan-conversion primitives.
//!
//! Each primitive owns its geometry plus a lazily-filled render cache and
//! exposes the same operation set: render to an ordered pixel sequence,
//! padded bounding box, and the three affine mutators.
//!
//! # Algorithms
//!
//! - **DDA / Bresenham**: incremental line scan conversion
//! - **Cohen-Sutherland / Liang-Barsky**: endpoint clipping for lines
//! - **Midpoint Ellipse**: two-region incremental outline
//! - **Bernstein Bezier / Uniform cubic B-spline**: sampled curve evaluation

mod curve;
mod ellipse;
mod line;
mod polygon;

pub use curve::{Curve, CurveAlgorithm};
pub use ellipse::Ellipse;
pub use line::{ClipAlgorithm, Line, LineAlgorithm};
pub use polygon::Polygon;
