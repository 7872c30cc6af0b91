//! Parametric curve scan conversion.
//!
//! Bezier curves of arbitrary degree are evaluated directly in the Bernstein
//! basis. Uniform cubic B-splines are reduced to a chain of cubic Bezier
//! segments and rasterized with the same evaluator, so there is exactly one
//! sampling code path.

use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::transform::{rotate_point, scale_point, translate_point};

/// Evaluation algorithm for [`Curve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveAlgorithm {
    /// Bernstein-basis Bezier of degree `n - 1` for `n` control points.
    Bezier,
    /// Uniform cubic B-spline, reduced to Bezier segments.
    BSpline,
}

/// A parametric curve primitive with a memoized render cache.
#[derive(Debug, Clone)]
pub struct Curve {
    points: Vec<Point>,
    algorithm: CurveAlgorithm,
    cache: Option<Vec<Point>>,
}

impl Curve {
    /// Create a curve from at least two control points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewControlPoints`] for fewer than two points.
    pub fn new(points: Vec<Point>, algorithm: CurveAlgorithm) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::TooFewControlPoints {
                count: points.len(),
            });
        }
        Ok(Self {
            points,
            algorithm,
            cache: None,
        })
    }

    /// The control points defining the curve.
    #[must_use]
    pub fn control_points(&self) -> &[Point] {
        &self.points
    }

    /// The evaluation algorithm this curve renders with.
    #[must_use]
    pub const fn algorithm(&self) -> CurveAlgorithm {
        self.algorithm
    }

    /// The sampled pixel sequence of the curve, memoized until the next
    /// mutation.
    pub fn render(&mut self) -> &[Point] {
        if self.cache.is_none() {
            self.cache = Some(self.rasterize());
        }
        self.cache.as_deref().unwrap_or_default()
    }

    fn rasterize(&self) -> Vec<Point> {
        match self.algorithm {
            CurveAlgorithm::Bezier => scan_bezier(&to_float(&self.points)),
            CurveAlgorithm::BSpline => scan_bspline(&self.points),
        }
    }

    /// Bounding box of the rendered samples with one pixel of padding.
    ///
    /// There is no closed form over the control polygon; the box comes from
    /// the (cached) render, hence `&mut`.
    pub fn bounding_rect(&mut self) -> Rect {
        let points = self.render();
        let mut xmin = i32::MAX;
        let mut xmax = i32::MIN;
        let mut ymin = i32::MAX;
        let mut ymax = i32::MIN;
        for p in points {
            xmin = xmin.min(p.x);
            xmax = xmax.max(p.x);
            ymin = ymin.min(p.y);
            ymax = ymax.max(p.y);
        }
        Rect::new(xmin - 1, ymin - 1, xmax - xmin + 2, ymax - ymin + 2)
    }

    /// Translate every control point by integer deltas.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.cache = None;
        for p in &mut self.points {
            *p = translate_point(*p, dx, dy);
        }
    }

    /// Rotate every control point about a pivot.
    pub fn rotate(&mut self, pivot: Point, degrees: i32) {
        self.cache = None;
        for p in &mut self.points {
            *p = rotate_point(*p, pivot, degrees);
        }
    }

    /// Scale every control point toward a pivot by a uniform factor.
    pub fn scale(&mut self, pivot: Point, s: f64) {
        self.cache = None;
        for p in &mut self.points {
            *p = scale_point(*p, pivot, s);
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The constructor guarantees at least two control points.
        let first = self.points.first().copied().unwrap_or_default();
        let last = self.points.last().copied().unwrap_or_default();
        write!(
            f,
            "Curve ({}, {}) \u{2192} ({}, {})",
            first.x, first.y, last.x, last.y
        )
    }
}

fn to_float(points: &[Point]) -> Vec<(f64, f64)> {
    points
        .iter()
        .map(|p| (f64::from(p.x), f64::from(p.y)))
        .collect()
}

/// Adaptive sample count: denser for longer control polygons so adjacent
/// samples stay within a pixel of each other.
fn sample_count(ctrl: &[(f64, f64)]) -> usize {
    let mut steps = 1_i64;
    for pair in ctrl.windows(2) {
        let dx = (pair[1].0 - pair[0].0).abs();
        let dy = (pair[1].1 - pair[0].1).abs();
        steps += (3.0 * (dx + dy)).round_ties_even() as i64;
    }
    steps as usize
}

/// Evaluate a Bezier curve over its full parameter range.
///
/// Control coordinates are floats so the evaluator also serves the
/// fractional control points derived from B-spline conversion.
fn scan_bezier(ctrl: &[(f64, f64)]) -> Vec<Point> {
    let n = ctrl.len();

    let mut factorial = vec![1.0_f64; n];
    for i in 1..n {
        factorial[i] = factorial[i - 1] * i as f64;
    }

    // Bernstein coefficients folded into the control coordinates.
    let mut bx = Vec::with_capacity(n);
    let mut by = Vec::with_capacity(n);
    for (i, &(x, y)) in ctrl.iter().enumerate() {
        let binomial = factorial[n - 1] / (factorial[i] * factorial[n - 1 - i]);
        bx.push(binomial * x);
        by.push(binomial * y);
    }

    let steps = sample_count(ctrl);
    let mut points = Vec::with_capacity(steps + 1);
    for k in 0..=steps {
        let u = k as f64 / steps as f64;
        let mut x = 0.0;
        let mut y = 0.0;
        for i in 0..n {
            let basis = u.powi(i as i32) * (1.0 - u).powi((n - 1 - i) as i32);
            x += bx[i] * basis;
            y += by[i] * basis;
        }
        points.push(Point::rounded(x, y));
    }
    points
}

/// Uniform cubic B-spline via conversion to Bezier segments.
///
/// Fewer than four control points degenerate to a single Bezier over all of
/// them. Otherwise every window of four consecutive control points yields
/// one cubic segment through the standard boundary formulas; the outermost
/// endpoints are clamped to the original first and last control points so
/// the drawn curve starts and ends where the user placed it.
fn scan_bspline(points: &[Point]) -> Vec<Point> {
    if points.len() < 4 {
        return scan_bezier(&to_float(points));
    }

    let ctrl = to_float(points);
    let n = ctrl.len();
    let last_segment = n - 4;

    let mut out = Vec::new();
    for k in 0..=last_segment {
        let d0 = ctrl[k];
        let d1 = ctrl[k + 1];
        let d2 = ctrl[k + 2];
        let d3 = ctrl[k + 3];

        let b0 = if k == 0 { ctrl[0] } else { junction(d0, d1, d2) };
        let b1 = third(d1, d2);
        let b2 = third(d2, d1);
        let b3 = if k == last_segment {
            ctrl[n - 1]
        } else {
            junction(d1, d2, d3)
        };

        out.extend(scan_bezier(&[b0, b1, b2, b3]));
    }
    out
}

/// Segment junction `(a + 4b + c) / 6`.
fn junction(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> (f64, f64) {
    (
        (a.0 + 4.0 * b.0 + c.0) / 6.0,
        (a.1 + 4.0 * b.1 + c.1) / 6.0,
    )
}

/// One-third blend `(2a + b) / 3`.
fn third(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    ((2.0 * a.0 + b.0) / 3.0, (2.0 * a.1 + b.1) / 3.0)
}
