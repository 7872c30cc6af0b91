//! Affine point operators shared by every primitive variant.
//!
//! Each primitive applies these to its own geometry fields; none of them
//! touches a render cache, that is the caller's contract.

use crate::geometry::Point;

/// Translate a point by integer deltas.
#[must_use]
pub const fn translate_point(p: Point, dx: i32, dy: i32) -> Point {
    Point::new(p.x + dx, p.y + dy)
}

/// Rotate a point about a pivot by a whole number of degrees.
///
/// The offset from the pivot is taken to polar form, the rotation angle is
/// added, and the result is quantized back to pixels. Positive angles advance
/// the polar angle from +x toward +y; on a raster with y growing downward
/// that turns clockwise on screen. A point equal to the pivot stays put
/// exactly.
#[must_use]
pub fn rotate_point(p: Point, pivot: Point, degrees: i32) -> Point {
    let dx = f64::from(p.x - pivot.x);
    let dy = f64::from(p.y - pivot.y);
    let radius = dx.hypot(dy);
    let theta = dy.atan2(dx).to_degrees() + f64::from(degrees);
    let (sin, cos) = theta.to_radians().sin_cos();
    Point::rounded(
        f64::from(pivot.x) + radius * cos,
        f64::from(pivot.y) + radius * sin,
    )
}

/// Scale a point toward or away from a pivot by a uniform factor.
///
/// An affine blend: `s = 1` is the identity, `s = 0` collapses onto the
/// pivot, negative factors reflect through it.
#[must_use]
pub fn scale_point(p: Point, pivot: Point, s: f64) -> Point {
    Point::rounded(
        f64::from(p.x) * s + (1.0 - s) * f64::from(pivot.x),
        f64::from(p.y) * s + (1.0 - s) * f64::from(pivot.y),
    )
}
