//! Polygon primitive: a closed ring of line segments.

use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::raster::line::{Line, LineAlgorithm};

/// A polygon primitive built from an ordered vertex ring.
///
/// `n` vertices materialize as exactly `n` [`Line`] segments, segment `i`
/// joining vertex `i - 1` (wrapping) to vertex `i`, all sharing one scan
/// algorithm. Rasterization delegates to the segments.
#[derive(Debug, Clone)]
pub struct Polygon {
    lines: Vec<Line>,
    cache: Option<Vec<Point>>,
}

impl Polygon {
    /// Create a polygon from an ordered vertex list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyVertices`] if the list is empty.
    pub fn new(vertices: &[Point], algorithm: LineAlgorithm) -> Result<Self> {
        if vertices.is_empty() {
            return Err(Error::EmptyVertices);
        }
        let n = vertices.len();
        let mut lines = Vec::with_capacity(n);
        for i in 0..n {
            let prev = vertices[(i + n - 1) % n];
            lines.push(Line::new(prev, vertices[i], algorithm));
        }
        Ok(Self { lines, cache: None })
    }

    /// The edge segments forming the ring.
    #[must_use]
    pub fn edges(&self) -> &[Line] {
        &self.lines
    }

    /// Concatenated renders of every edge in ring order, memoized until the
    /// next mutation. Shared vertices appear twice, once as the end of one
    /// edge and once as the start of the next.
    pub fn render(&mut self) -> &[Point] {
        if self.cache.is_none() {
            let mut points = Vec::new();
            for line in &mut self.lines {
                points.extend_from_slice(line.render());
            }
            self.cache = Some(points);
        }
        self.cache.as_deref().unwrap_or_default()
    }

    /// Min/max union of the edge boxes, re-padded by one pixel.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        let mut xmin = i32::MAX;
        let mut xmax = i32::MIN;
        let mut ymin = i32::MAX;
        let mut ymax = i32::MIN;
        for line in &self.lines {
            let rect = line.bounding_rect();
            xmin = xmin.min(rect.x + 1);
            xmax = xmax.max(rect.max_x() - 1);
            ymin = ymin.min(rect.y + 1);
            ymax = ymax.max(rect.max_y() - 1);
        }
        Rect::new(xmin - 1, ymin - 1, xmax - xmin + 2, ymax - ymin + 2)
    }

    /// Translate every edge by integer deltas.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.cache = None;
        for line in &mut self.lines {
            line.translate(dx, dy);
        }
    }

    /// Rotate every edge about a pivot.
    pub fn rotate(&mut self, pivot: Point, degrees: i32) {
        self.cache = None;
        for line in &mut self.lines {
            line.rotate(pivot, degrees);
        }
    }

    /// Scale every edge toward a pivot by a uniform factor.
    pub fn scale(&mut self, pivot: Point, s: f64) {
        self.cache = None;
        for line in &mut self.lines {
            line.scale(pivot, s);
        }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The first edge wraps from the last vertex, so its end is vertex 0.
        let first = self.lines.first().map(Line::end).unwrap_or_default();
        write!(f, "Polygon ({}, {})...", first.x, first.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vertex_list_is_rejected() {
        assert!(matches!(
            Polygon::new(&[], LineAlgorithm::Dda),
            Err(Error::EmptyVertices)
        ));
    }

    #[test]
    fn test_vertex_count_equals_edge_count() {
        let vertices = [
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        let polygon = Polygon::new(&vertices, LineAlgorithm::Bresenham).unwrap();
        assert_eq!(polygon.edges().len(), 4);

        // The ring wraps: the first edge arrives at the first vertex.
        assert_eq!(polygon.edges()[0].start(), Point::new(0, 10));
        assert_eq!(polygon.edges()[0].end(), Point::new(0, 0));
    }

    #[test]
    fn test_render_concatenates_edges() {
        let vertices = [Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)];
        let mut polygon = Polygon::new(&vertices, LineAlgorithm::Dda).unwrap();

        let edge_total: usize = polygon
            .edges()
            .to_vec()
            .iter_mut()
            .map(|line| line.render().len())
            .sum();
        assert_eq!(polygon.render().len(), edge_total);
    }

    #[test]
    fn test_single_vertex_renders_one_point() {
        let mut polygon = Polygon::new(&[Point::new(5, 5)], LineAlgorithm::Bresenham).unwrap();
        assert_eq!(polygon.render(), [Point::new(5, 5)]);
    }

    #[test]
    fn test_bounding_rect_unions_edges() {
        let vertices = [Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)];
        let polygon = Polygon::new(&vertices, LineAlgorithm::Dda).unwrap();
        assert_eq!(polygon.bounding_rect(), Rect::new(-1, -1, 12, 12));
    }

    #[test]
    fn test_translate_broadcasts_to_edges() {
        let vertices = [Point::new(0, 0), Point::new(4, 0), Point::new(4, 4)];
        let mut polygon = Polygon::new(&vertices, LineAlgorithm::Bresenham).unwrap();
        polygon.translate(3, -2);
        assert_eq!(polygon.edges()[0].end(), Point::new(3, -2));
        assert_eq!(polygon.edges()[1].start(), Point::new(3, -2));
        assert_eq!(polygon.edges()[1].end(), Point::new(7, -2));
    }

    #[test]
    fn test_scale_about_vertex_keeps_that_vertex() {
        let vertices = [Point::new(0, 0), Point::new(8, 0), Point::new(8, 8)];
        let mut polygon = Polygon::new(&vertices, LineAlgorithm::Dda).unwrap();
        polygon.scale(Point::ORIGIN, 0.5);
        assert_eq!(polygon.edges()[0].end(), Point::new(0, 0));
        assert_eq!(polygon.edges()[1].end(), Point::new(4, 0));
    }

    #[test]
    fn test_display() {
        let polygon =
            Polygon::new(&[Point::new(2, 3), Point::new(4, 5)], LineAlgorithm::Dda).unwrap();
        assert_eq!(polygon.to_string(), "Polygon (2, 3)...");
    }
}
