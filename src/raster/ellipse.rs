//! Axis-aligned ellipse scan conversion with the midpoint algorithm.

use std::fmt;

use crate::geometry::{round_coord, Point, Rect};
use crate::transform::{rotate_point, scale_point, translate_point};

/// An axis-aligned ellipse primitive with a memoized render cache.
///
/// Derived at construction from an opposite-corner bounding box. Rotation
/// moves only the center; the shape stays axis-aligned.
#[derive(Debug, Clone)]
pub struct Ellipse {
    center: Point,
    rx: i32,
    ry: i32,
    cache: Option<Vec<Point>>,
}

impl Ellipse {
    /// Create an ellipse inscribed in the box spanned by two opposite
    /// corners, in any order.
    #[must_use]
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            center: Point::rounded(
                (f64::from(x0) + f64::from(x1)) / 2.0,
                (f64::from(y0) + f64::from(y1)) / 2.0,
            ),
            rx: round_coord(f64::from((x1 - x0).abs()) / 2.0),
            ry: round_coord(f64::from((y1 - y0).abs()) / 2.0),
            cache: None,
        }
    }

    /// Center of the ellipse.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Semi-axis lengths `(rx, ry)`.
    #[must_use]
    pub const fn radii(&self) -> (i32, i32) {
        (self.rx, self.ry)
    }

    /// The pixel sequence of the ellipse outline, memoized until the next
    /// mutation.
    pub fn render(&mut self) -> &[Point] {
        if self.cache.is_none() {
            self.cache = Some(self.rasterize());
        }
        self.cache.as_deref().unwrap_or_default()
    }

    /// Midpoint scan: region 1 walks y upward while the slope magnitude is
    /// below one (`2*ry^2*x > 2*rx^2*y`), region 2 walks x down to zero.
    /// Every offset is emitted into all four quadrants.
    fn rasterize(&self) -> Vec<Point> {
        let mut points = Vec::new();

        let mut x = i64::from(self.rx);
        let mut y = 0_i64;

        let taa = x * x;
        let t2aa = 2 * taa;
        let t4aa = 2 * t2aa;

        let tbb = i64::from(self.ry) * i64::from(self.ry);
        let t2bb = 2 * tbb;
        let t4bb = 2 * t2bb;

        let mut tx = x;
        let mut d1 = seed(
            (t2bb * x * (x - 1)) as f64 + tbb as f64 / 2.0 + (t2aa * (1 - tbb)) as f64,
        );

        while t2bb * tx > t2aa * y {
            self.emit_quadrants(&mut points, x, y);
            if d1 < 0 {
                y += 1;
                d1 += t4aa * y + t2aa;
                tx = x - 1;
            } else {
                x -= 1;
                y += 1;
                d1 = d1 - t4bb * x + t4aa * y + t2aa;
                tx = x;
            }
        }

        let mut d2 = seed(
            (t2bb * (x * x + 1) - t4bb * x) as f64
                + (t2aa * (y * y + y - tbb)) as f64
                + taa as f64 / 2.0,
        );

        while x >= 0 {
            self.emit_quadrants(&mut points, x, y);
            if d2 < 0 {
                x -= 1;
                y += 1;
                d2 += t4aa * y - t4bb * x + t2bb;
            } else {
                x -= 1;
                d2 = d2 - t4bb * x + t2bb;
            }
        }

        points
    }

    fn emit_quadrants(&self, points: &mut Vec<Point>, x: i64, y: i64) {
        let (x, y) = (x as i32, y as i32);
        let Point { x: cx, y: cy } = self.center;
        points.push(Point::new(cx + x, cy + y));
        points.push(Point::new(cx + x, cy - y));
        points.push(Point::new(cx - x, cy + y));
        points.push(Point::new(cx - x, cy - y));
    }

    /// Axis-aligned bounding box with one pixel of padding.
    #[must_use]
    pub const fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.rx - 1,
            self.center.y - self.ry - 1,
            2 * self.rx + 2,
            2 * self.ry + 2,
        )
    }

    /// Translate the center by integer deltas.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.cache = None;
        self.center = translate_point(self.center, dx, dy);
    }

    /// Rotate the center about a pivot. The radii are untouched; the shape
    /// stays axis-aligned.
    pub fn rotate(&mut self, pivot: Point, degrees: i32) {
        self.cache = None;
        self.center = rotate_point(self.center, pivot, degrees);
    }

    /// Scale the center toward a pivot and both radii by the same factor.
    /// The stored radii are the magnitude of the scaled value, so a negative
    /// factor reflects the center but keeps the radii non-negative.
    pub fn scale(&mut self, pivot: Point, s: f64) {
        self.cache = None;
        self.center = scale_point(self.center, pivot, s);
        self.rx = round_coord(f64::from(self.rx) * s).abs();
        self.ry = round_coord(f64::from(self.ry) * s).abs();
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ellipse ({} \u{b1} {}, {} \u{b1} {})",
            self.center.x, self.rx, self.center.y, self.ry
        )
    }
}

/// Quantize a decision-variable seed; the fractional half comes from the
/// `/2` terms of the discretized conic.
fn seed(v: f64) -> i64 {
    v.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_center_and_radii_from_corners() {
        let ellipse = Ellipse::from_corners(0, 0, 10, 6);
        assert_eq!(ellipse.center(), Point::new(5, 3));
        assert_eq!(ellipse.radii(), (5, 3));

        // Corner order does not matter.
        let flipped = Ellipse::from_corners(10, 6, 0, 0);
        assert_eq!(flipped.center(), Point::new(5, 3));
        assert_eq!(flipped.radii(), (5, 3));
    }

    #[test]
    fn test_odd_box_rounds_ties_to_even() {
        let ellipse = Ellipse::from_corners(0, 0, 5, 5);
        assert_eq!(ellipse.center(), Point::new(2, 2));
        assert_eq!(ellipse.radii(), (2, 2));
    }

    #[test]
    fn test_render_is_reflection_symmetric() {
        let mut ellipse = Ellipse::from_corners(-8, -5, 8, 5);
        let (cx, cy) = (0, 0);
        let set: HashSet<Point> = ellipse.render().iter().copied().collect();
        for p in &set {
            let (a, b) = (p.x - cx, p.y - cy);
            assert!(set.contains(&Point::new(cx - a, cy + b)));
            assert!(set.contains(&Point::new(cx + a, cy - b)));
            assert!(set.contains(&Point::new(cx - a, cy - b)));
        }
    }

    #[test]
    fn test_render_touches_axis_extremes() {
        let mut ellipse = Ellipse::from_corners(-10, -4, 10, 4);
        let set: HashSet<Point> = ellipse.render().iter().copied().collect();
        assert!(set.contains(&Point::new(10, 0)));
        assert!(set.contains(&Point::new(-10, 0)));
        assert!(set.contains(&Point::new(0, 4)));
        assert!(set.contains(&Point::new(0, -4)));
    }

    #[test]
    fn test_zero_radius_renders_center_only() {
        let mut ellipse = Ellipse::from_corners(3, 4, 3, 4);
        let set: HashSet<Point> = ellipse.render().iter().copied().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Point::new(3, 4)));
    }

    #[test]
    fn test_translate_moves_center_only() {
        let mut ellipse = Ellipse::from_corners(0, 0, 10, 6);
        ellipse.translate(7, -2);
        assert_eq!(ellipse.center(), Point::new(12, 1));
        assert_eq!(ellipse.radii(), (5, 3));
    }

    #[test]
    fn test_scale_shrinks_radii() {
        let mut ellipse = Ellipse::from_corners(0, 0, 20, 12);
        ellipse.scale(Point::ORIGIN, 0.5);
        assert_eq!(ellipse.center(), Point::new(5, 3));
        assert_eq!(ellipse.radii(), (5, 3));
    }

    #[test]
    fn test_negative_scale_keeps_radii_non_negative() {
        let mut ellipse = Ellipse::from_corners(0, 0, 10, 6);
        ellipse.scale(Point::ORIGIN, -1.0);
        assert_eq!(ellipse.center(), Point::new(-5, -3));
        assert_eq!(ellipse.radii(), (5, 3));
        assert!(!ellipse.render().is_empty());
    }

    #[test]
    fn test_bounding_rect_pads_by_one() {
        let ellipse = Ellipse::from_corners(0, 0, 10, 6);
        assert_eq!(ellipse.bounding_rect(), Rect::new(-1, -1, 12, 8));
    }

    #[test]
    fn test_display() {
        let ellipse = Ellipse::from_corners(0, 0, 10, 6);
        assert_eq!(ellipse.to_string(), "Ellipse (5 \u{b1} 5, 3 \u{b1} 3)");
    }
}
