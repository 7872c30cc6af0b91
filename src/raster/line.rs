//! Line segment scan conversion and rectangle clipping.
//!
//! Implements the two classical incremental line algorithms (DDA and
//! Bresenham) and both endpoint-clipping algorithms (Cohen-Sutherland
//! outcodes and Liang-Barsky parametric), which live here because both
//! operate on a line's endpoints.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Liang, Y-D., & Barsky, B. (1984). "A New Concept and Method for Line Clipping."

use std::fmt;

use crate::geometry::{Point, Rect};
use crate::transform::{rotate_point, scale_point, translate_point};

/// Scan-conversion algorithm for lines and polygon edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAlgorithm {
    /// Digital differential analyzer: float accumulation, rounded samples.
    Dda,
    /// Bresenham's integer midpoint algorithm.
    Bresenham,
}

/// Endpoint clipping algorithm against an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipAlgorithm {
    /// Cohen-Sutherland outcode clipping.
    CohenSutherland,
    /// Liang-Barsky parametric clipping.
    LiangBarsky,
}

// Outcode bits, one per violated half-plane.
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// A line segment primitive with a memoized render cache.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point,
    end: Point,
    algorithm: LineAlgorithm,
    cache: Option<Vec<Point>>,
}

impl Line {
    /// Create a new line segment between two endpoints.
    #[must_use]
    pub const fn new(start: Point, end: Point, algorithm: LineAlgorithm) -> Self {
        Self {
            start,
            end,
            algorithm,
            cache: None,
        }
    }

    /// Create a line from endpoint coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32, algorithm: LineAlgorithm) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1), algorithm)
    }

    /// First endpoint.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Second endpoint.
    #[must_use]
    pub const fn end(&self) -> Point {
        self.end
    }

    /// The scan-conversion algorithm this line renders with.
    #[must_use]
    pub const fn algorithm(&self) -> LineAlgorithm {
        self.algorithm
    }

    /// The ordered pixel sequence from `start` to `end`, memoized until the
    /// next mutation.
    pub fn render(&mut self) -> &[Point] {
        if self.cache.is_none() {
            self.cache = Some(self.rasterize());
        }
        self.cache.as_deref().unwrap_or_default()
    }

    fn rasterize(&self) -> Vec<Point> {
        match self.algorithm {
            LineAlgorithm::Dda => scan_dda(self.start, self.end),
            LineAlgorithm::Bresenham => scan_bresenham(self.start, self.end),
        }
    }

    /// Axis-aligned bounding box of the segment with one pixel of padding.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        let xmin = self.start.x.min(self.end.x);
        let xmax = self.start.x.max(self.end.x);
        let ymin = self.start.y.min(self.end.y);
        let ymax = self.start.y.max(self.end.y);
        Rect::new(xmin - 1, ymin - 1, xmax - xmin + 2, ymax - ymin + 2)
    }

    /// Translate both endpoints by integer deltas.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.cache = None;
        self.start = translate_point(self.start, dx, dy);
        self.end = translate_point(self.end, dx, dy);
    }

    /// Rotate both endpoints about a pivot.
    pub fn rotate(&mut self, pivot: Point, degrees: i32) {
        self.cache = None;
        self.start = rotate_point(self.start, pivot, degrees);
        self.end = rotate_point(self.end, pivot, degrees);
    }

    /// Scale both endpoints toward a pivot by a uniform factor.
    pub fn scale(&mut self, pivot: Point, s: f64) {
        self.cache = None;
        self.start = scale_point(self.start, pivot, s);
        self.end = scale_point(self.end, pivot, s);
    }

    /// Clip the segment against an axis-aligned window.
    ///
    /// On accept the endpoints are overwritten with the clipped (rounded)
    /// ones and `true` is returned. On reject the geometry is left untouched
    /// and `false` is returned; the caller decides whether to discard the
    /// line. The window may be given with corners in any order.
    pub fn clip(&mut self, window: Rect, algorithm: ClipAlgorithm) -> bool {
        self.cache = None;
        let window = window.normalized();
        match algorithm {
            ClipAlgorithm::CohenSutherland => self.clip_outcode(&window),
            ClipAlgorithm::LiangBarsky => self.clip_parametric(&window),
        }
    }

    /// Cohen-Sutherland: re-encode and cut one boundary at a time until the
    /// segment is trivially accepted or rejected.
    fn clip_outcode(&mut self, window: &Rect) -> bool {
        let xmin = f64::from(window.x);
        let ymin = f64::from(window.y);
        let xmax = f64::from(window.max_x());
        let ymax = f64::from(window.max_y());

        let encode = |x: f64, y: f64| -> u8 {
            let mut code = 0;
            if x < xmin {
                code |= LEFT;
            } else if x > xmax {
                code |= RIGHT;
            }
            if y < ymin {
                code |= BOTTOM;
            } else if y > ymax {
                code |= TOP;
            }
            code
        };

        let mut x0 = f64::from(self.start.x);
        let mut y0 = f64::from(self.start.y);
        let mut x1 = f64::from(self.end.x);
        let mut y1 = f64::from(self.end.y);
        let mut code0 = encode(x0, y0);
        let mut code1 = encode(x1, y1);

        loop {
            if code0 | code1 == 0 {
                break;
            }
            if code0 & code1 != 0 {
                return false;
            }

            // Both outside the same side was rejected above, so when both
            // codes are nonzero pick the numerically greater one; the bit
            // tested below is set for exactly one endpoint, which keeps the
            // denominators nonzero.
            let out = code0.max(code1);
            let (x, y) = if out & TOP != 0 {
                (x0 + (x1 - x0) * (ymax - y0) / (y1 - y0), ymax)
            } else if out & BOTTOM != 0 {
                (x0 + (x1 - x0) * (ymin - y0) / (y1 - y0), ymin)
            } else if out & RIGHT != 0 {
                (xmax, y0 + (y1 - y0) * (xmax - x0) / (x1 - x0))
            } else {
                (xmin, y0 + (y1 - y0) * (xmin - x0) / (x1 - x0))
            };

            if out == code0 {
                x0 = x;
                y0 = y;
                code0 = encode(x0, y0);
            } else {
                x1 = x;
                y1 = y;
                code1 = encode(x1, y1);
            }
        }

        self.start = Point::rounded(x0, y0);
        self.end = Point::rounded(x1, y1);
        true
    }

    /// Liang-Barsky: intersect the parametric segment `P(t), t in [0, 1]`
    /// with all four half-planes at once.
    fn clip_parametric(&mut self, window: &Rect) -> bool {
        let x0 = f64::from(self.start.x);
        let y0 = f64::from(self.start.y);
        let dx = f64::from(self.end.x) - x0;
        let dy = f64::from(self.end.y) - y0;

        // (p, q) per half-plane: left, right, bottom, top.
        let constraints = [
            (-dx, x0 - f64::from(window.x)),
            (dx, f64::from(window.max_x()) - x0),
            (-dy, y0 - f64::from(window.y)),
            (dy, f64::from(window.max_y()) - y0),
        ];

        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;
        for (p, q) in constraints {
            if p == 0.0 {
                // Parallel to this boundary; outside means no intersection.
                if q < 0.0 {
                    return false;
                }
            } else {
                let t = q / p;
                if p < 0.0 {
                    t_enter = t_enter.max(t);
                } else {
                    t_exit = t_exit.min(t);
                }
            }
        }

        if t_enter > t_exit {
            return false;
        }

        self.start = Point::rounded(x0 + dx * t_enter, y0 + dy * t_enter);
        self.end = Point::rounded(x0 + dx * t_exit, y0 + dy * t_exit);
        true
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line ({}, {}) \u{2192} ({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

/// DDA scan: `max(|dx|, |dy|)` steps of float accumulation, every sample
/// rounded. Coincident endpoints emit exactly one point.
fn scan_dda(start: Point, end: Point) -> Vec<Point> {
    let steps = (end.x - start.x).abs().max((end.y - start.y).abs());
    if steps == 0 {
        return vec![start];
    }

    let dx = f64::from(end.x - start.x) / f64::from(steps);
    let dy = f64::from(end.y - start.y) / f64::from(steps);

    let mut points = Vec::with_capacity(steps as usize + 1);
    let mut x = f64::from(start.x);
    let mut y = f64::from(start.y);
    for _ in 0..=steps {
        points.push(Point::rounded(x, y));
        x += dx;
        y += dy;
    }
    points
}

/// Bresenham scan: integer walk along the driving axis, correcting the other
/// axis when the error accumulator goes negative. The loop stops when the
/// driving coordinate reaches its target and the final endpoint is appended
/// unconditionally, which also covers coincident endpoints.
fn scan_bresenham(start: Point, end: Point) -> Vec<Point> {
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let sx = if start.x > end.x { -1 } else { 1 };
    let sy = if start.y > end.y { -1 } else { 1 };

    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);
    let mut x = start.x;
    let mut y = start.y;

    if dx > dy {
        let mut err = f64::from(dx) / 2.0;
        while x != end.x {
            points.push(Point::new(x, y));
            err -= f64::from(dy);
            if err < 0.0 {
                y += sy;
                err += f64::from(dx);
            }
            x += sx;
        }
    } else {
        let mut err = f64::from(dy) / 2.0;
        while y != end.y {
            points.push(Point::new(x, y));
            err -= f64::from(dx);
            if err < 0.0 {
                x += sx;
                err += f64::from(dy);
            }
            y += sy;
        }
    }

    points.push(Point::new(x, y));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bresenham_known_sequence() {
        let mut line = Line::from_coords(0, 0, 4, 2, LineAlgorithm::Bresenham);
        let expected = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 1),
            Point::new(3, 1),
            Point::new(4, 2),
        ];
        assert_eq!(line.render(), expected);
    }

    #[test]
    fn test_bresenham_point_count_and_endpoints() {
        for (x0, y0, x1, y1) in [(0, 0, 10, 3), (5, 5, -7, 2), (3, -4, 3, 9), (-2, 6, 8, 6)] {
            let mut line = Line::from_coords(x0, y0, x1, y1, LineAlgorithm::Bresenham);
            let points = line.render();
            let expected_len = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            assert_eq!(points.len(), expected_len);
            assert_eq!(points[0], Point::new(x0, y0));
            assert_eq!(points[points.len() - 1], Point::new(x1, y1));
        }
    }

    #[test]
    fn test_dda_endpoints_and_count() {
        let mut line = Line::from_coords(-3, 2, 9, -5, LineAlgorithm::Dda);
        let points = line.render().to_vec();
        assert_eq!(points.len(), 13);
        assert_eq!(points[0], Point::new(-3, 2));
        assert_eq!(points[12], Point::new(9, -5));
    }

    #[test]
    fn test_degenerate_segment_is_single_point() {
        for algorithm in [LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
            let mut line = Line::from_coords(4, 7, 4, 7, algorithm);
            assert_eq!(line.render(), [Point::new(4, 7)]);
        }
    }

    #[test]
    fn test_render_cache_survives_until_mutation() {
        let mut line = Line::from_coords(0, 0, 5, 0, LineAlgorithm::Dda);
        let first = line.render().to_vec();
        assert_eq!(line.render(), first);

        line.translate(0, 2);
        let moved = line.render();
        assert_eq!(moved[0], Point::new(0, 2));
        assert_eq!(moved[5], Point::new(5, 2));
    }

    #[test]
    fn test_bounding_rect_has_one_pixel_padding() {
        let line = Line::from_coords(2, 3, 6, 1, LineAlgorithm::Dda);
        assert_eq!(line.bounding_rect(), Rect::new(1, 0, 6, 4));
    }

    #[test]
    fn test_clip_inside_keeps_endpoints() {
        let window = Rect::new(0, 0, 100, 100);
        for algorithm in [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky] {
            let mut line = Line::from_coords(10, 10, 40, 30, LineAlgorithm::Dda);
            assert!(line.clip(window, algorithm));
            assert_eq!(line.start(), Point::new(10, 10));
            assert_eq!(line.end(), Point::new(40, 30));
        }
    }

    #[test]
    fn test_clip_outside_rejects() {
        let window = Rect::new(0, 0, 10, 10);
        for algorithm in [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky] {
            let mut line = Line::from_coords(20, 20, 30, 25, LineAlgorithm::Bresenham);
            assert!(!line.clip(window, algorithm));
        }
    }

    #[test]
    fn test_clip_crossing_segment() {
        let window = Rect::new(0, 0, 10, 10);
        let mut cs = Line::from_coords(-5, 5, 15, 5, LineAlgorithm::Dda);
        let mut lb = Line::from_coords(-5, 5, 15, 5, LineAlgorithm::Dda);
        assert!(cs.clip(window, ClipAlgorithm::CohenSutherland));
        assert!(lb.clip(window, ClipAlgorithm::LiangBarsky));
        assert_eq!(cs.start(), Point::new(0, 5));
        assert_eq!(cs.end(), Point::new(10, 5));
        assert_eq!(lb.start(), cs.start());
        assert_eq!(lb.end(), cs.end());
    }

    #[test]
    fn test_clip_window_corners_in_any_order() {
        let window = Rect::from_corners(Point::new(10, 10), Point::new(0, 0));
        let mut line = Line::from_coords(-5, 5, 15, 5, LineAlgorithm::Dda);
        assert!(line.clip(window, ClipAlgorithm::LiangBarsky));
        assert_eq!(line.start(), Point::new(0, 5));
        assert_eq!(line.end(), Point::new(10, 5));
    }

    #[test]
    fn test_clip_diagonal_agreement_within_one_pixel() {
        let window = Rect::new(0, 0, 20, 20);
        let mut cs = Line::from_coords(-10, -3, 30, 27, LineAlgorithm::Dda);
        let mut lb = cs.clone();
        assert!(cs.clip(window, ClipAlgorithm::CohenSutherland));
        assert!(lb.clip(window, ClipAlgorithm::LiangBarsky));
        assert!((cs.start().x - lb.start().x).abs() <= 1);
        assert!((cs.start().y - lb.start().y).abs() <= 1);
        assert!((cs.end().x - lb.end().x).abs() <= 1);
        assert!((cs.end().y - lb.end().y).abs() <= 1);
    }

    #[test]
    fn test_display() {
        let line = Line::from_coords(1, 2, 3, 4, LineAlgorithm::Dda);
        assert_eq!(line.to_string(), "Line (1, 2) \u{2192} (3, 4)");
    }
}
