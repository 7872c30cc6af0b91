//! Id-keyed drawing board that composes primitives onto a framebuffer.

use std::path::Path;

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};
use crate::output::PngEncoder;
use crate::primitive::Primitive;
use crate::raster::ClipAlgorithm;

/// One drawable entry on the board.
#[derive(Debug, Clone)]
struct Entry {
    id: String,
    primitive: Primitive,
    color: Rgb,
}

/// A drawing board: an insertion-ordered collection of colored primitives
/// over a fixed-size white canvas.
///
/// Primitives are addressed by string id. Transform and clip requests for
/// unknown ids are silently ignored, matching the forgiving behavior a
/// script driver expects. Re-adding an existing id replaces the primitive in
/// place but keeps its paint order.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    color: Rgb,
    entries: Vec<Entry>,
}

impl Canvas {
    /// Create an empty canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            color: Rgb::BLACK,
            entries: Vec::new(),
        })
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of primitives on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the board holds no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard every primitive and resize the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero; the
    /// canvas is left unchanged in that case.
    pub fn reset(&mut self, width: u32, height: u32) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    /// Set the draw color applied to primitives added from now on.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Add a primitive under an id, painted with the current draw color.
    pub fn add(&mut self, id: impl Into<String>, primitive: Primitive) {
        let id = id.into();
        let color = self.color;
        if let Some(entry) = self.entry_mut(&id) {
            entry.primitive = primitive;
            entry.color = color;
        } else {
            self.entries.push(Entry {
                id,
                primitive,
                color,
            });
        }
    }

    /// Remove the primitive under an id, if present.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Re-color an existing primitive.
    pub fn set_primitive_color(&mut self, id: &str, color: Rgb) {
        if let Some(entry) = self.entry_mut(id) {
            entry.color = color;
        }
    }

    /// The color an existing primitive is painted with.
    #[must_use]
    pub fn primitive_color(&self, id: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.color)
    }

    /// Translate the primitive under an id.
    pub fn translate(&mut self, id: &str, dx: i32, dy: i32) {
        if let Some(entry) = self.entry_mut(id) {
            entry.primitive.translate(dx, dy);
        }
    }

    /// Rotate the primitive under an id about a pivot.
    pub fn rotate(&mut self, id: &str, pivot: Point, degrees: i32) {
        if let Some(entry) = self.entry_mut(id) {
            entry.primitive.rotate(pivot, degrees);
        }
    }

    /// Scale the primitive under an id toward a pivot.
    pub fn scale(&mut self, id: &str, pivot: Point, s: f64) {
        if let Some(entry) = self.entry_mut(id) {
            entry.primitive.scale(pivot, s);
        }
    }

    /// Clip the line under an id against a window, removing it from the
    /// board when the clip rejects it. Non-line primitives are untouched.
    pub fn clip(&mut self, id: &str, window: Rect, algorithm: ClipAlgorithm) {
        let rejected = match self.entry_mut(id) {
            Some(entry) => entry.primitive.clip(window, algorithm) == Some(false),
            None => false,
        };
        if rejected {
            self.remove(id);
        }
    }

    /// Compose every primitive onto a white framebuffer in insertion order.
    /// Points outside the canvas are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be allocated.
    pub fn render(&mut self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(Rgb::WHITE);
        for entry in &mut self.entries {
            let color = entry.color;
            for &point in entry.primitive.render() {
                fb.plot(point, color);
            }
        }
        Ok(fb)
    }

    /// Render the board and write it to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, file creation or encoding fails.
    pub fn save_png<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let fb = self.render()?;
        PngEncoder::write_to_file(&fb, path)
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }
}
