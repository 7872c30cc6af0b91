//! Uniform dispatch over the closed set of drawable primitives.

use std::fmt;

use crate::geometry::{Point, Rect};
use crate::raster::{ClipAlgorithm, Curve, Ellipse, Line, Polygon};

/// A drawable primitive: one of the four variant types.
///
/// The enum is closed, so an out-of-range algorithm or variant selector is
/// unrepresentable. All geometry mutation goes through [`translate`],
/// [`rotate`], [`scale`] and [`clip`], each of which invalidates the
/// variant's render cache before touching geometry.
///
/// [`translate`]: Primitive::translate
/// [`rotate`]: Primitive::rotate
/// [`scale`]: Primitive::scale
/// [`clip`]: Primitive::clip
#[derive(Debug, Clone)]
pub enum Primitive {
    /// A line segment.
    Line(Line),
    /// A closed vertex ring.
    Polygon(Polygon),
    /// An axis-aligned ellipse.
    Ellipse(Ellipse),
    /// A Bezier or B-spline curve.
    Curve(Curve),
}

impl Primitive {
    /// The ordered pixel sequence for the current geometry, memoized until
    /// the next mutation. Never empty for a validly-constructed primitive.
    pub fn render(&mut self) -> &[Point] {
        match self {
            Self::Line(line) => line.render(),
            Self::Polygon(polygon) => polygon.render(),
            Self::Ellipse(ellipse) => ellipse.render(),
            Self::Curve(curve) => curve.render(),
        }
    }

    /// Axis-aligned bounding box with one pixel of padding on every side.
    ///
    /// Takes `&mut self` because the curve variant derives its box from the
    /// memoized render.
    pub fn bounding_rect(&mut self) -> Rect {
        match self {
            Self::Line(line) => line.bounding_rect(),
            Self::Polygon(polygon) => polygon.bounding_rect(),
            Self::Ellipse(ellipse) => ellipse.bounding_rect(),
            Self::Curve(curve) => curve.bounding_rect(),
        }
    }

    /// Translate the primitive by integer deltas.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Self::Line(line) => line.translate(dx, dy),
            Self::Polygon(polygon) => polygon.translate(dx, dy),
            Self::Ellipse(ellipse) => ellipse.translate(dx, dy),
            Self::Curve(curve) => curve.translate(dx, dy),
        }
    }

    /// Rotate the primitive about a pivot by whole degrees.
    pub fn rotate(&mut self, pivot: Point, degrees: i32) {
        match self {
            Self::Line(line) => line.rotate(pivot, degrees),
            Self::Polygon(polygon) => polygon.rotate(pivot, degrees),
            Self::Ellipse(ellipse) => ellipse.rotate(pivot, degrees),
            Self::Curve(curve) => curve.rotate(pivot, degrees),
        }
    }

    /// Scale the primitive toward a pivot by a uniform factor.
    pub fn scale(&mut self, pivot: Point, s: f64) {
        match self {
            Self::Line(line) => line.scale(pivot, s),
            Self::Polygon(polygon) => polygon.scale(pivot, s),
            Self::Ellipse(ellipse) => ellipse.scale(pivot, s),
            Self::Curve(curve) => curve.scale(pivot, s),
        }
    }

    /// Clip against an axis-aligned window.
    ///
    /// Defined only for the line variant: `Some(true)` when the clipped line
    /// survives, `Some(false)` when it lies wholly outside (the caller
    /// decides whether to discard it). Every other variant is left untouched
    /// and reports `None`.
    pub fn clip(&mut self, window: Rect, algorithm: ClipAlgorithm) -> Option<bool> {
        match self {
            Self::Line(line) => Some(line.clip(window, algorithm)),
            Self::Polygon(_) | Self::Ellipse(_) | Self::Curve(_) => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(line) => line.fmt(f),
            Self::Polygon(polygon) => polygon.fmt(f),
            Self::Ellipse(ellipse) => ellipse.fmt(f),
            Self::Curve(curve) => curve.fmt(f),
        }
    }
}

impl From<Line> for Primitive {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Polygon> for Primitive {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<Ellipse> for Primitive {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}

impl From<Curve> for Primitive {
    fn from(curve: Curve) -> Self {
        Self::Curve(curve)
    }
}
