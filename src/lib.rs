//! # Rasterpad
//!
//! Scanline rasterization of 2D vector primitives in pure Rust.
//!
//! Rasterpad converts line segments, polygons, ellipses and parametric
//! curves into ordered sequences of integer pixel coordinates using the
//! classical incremental algorithms, and composes them onto an RGB canvas
//! that can be written out as PNG. Primitives support affine mutation
//! (translate/rotate/scale) and lines can be clipped against an
//! axis-aligned window.
//!
//! ## Quick Start
//!
//! ```rust
//! use rasterpad::prelude::*;
//!
//! # fn main() -> rasterpad::Result<()> {
//! let mut canvas = Canvas::new(200, 200)?;
//! canvas.set_color(Rgb::RED);
//! canvas.add(
//!     "diagonal",
//!     Line::from_coords(10, 10, 180, 120, LineAlgorithm::Bresenham).into(),
//! );
//! let fb = canvas.render()?;
//! assert_eq!(fb.get_pixel(10, 10), Some(Rgb::RED));
//! # Ok(())
//! # }
//! ```
//!
//! ## Algorithms
//!
//! - **DDA / Bresenham** line scan conversion
//! - **Midpoint ellipse** (two-region) outline
//! - **Bernstein-basis Bezier** of arbitrary degree
//! - **Uniform cubic B-spline** reduced to Bezier segments
//! - **Cohen-Sutherland** and **Liang-Barsky** line clipping
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Liang, Y-D., & Barsky, B. (1984). "A New Concept and Method for Line Clipping."
//! - Van Aken, J. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGB color type and named palette.
pub mod color;

/// Integer points, rectangles and the crate rounding rule.
pub mod geometry;

/// Affine point operators (translate/rotate/scale about a pivot).
pub mod transform;

/// Scan-conversion primitives (line, polygon, ellipse, curve).
pub mod raster;

/// Uniform dispatch over the closed primitive set.
pub mod primitive;

// ============================================================================
// Composition Modules
// ============================================================================

/// RGB pixel buffer.
pub mod framebuffer;

/// Id-keyed drawing board over a framebuffer.
pub mod canvas;

/// Output encoders (PNG).
pub mod output;

/// Drawing script parser and interpreter.
pub mod script;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterpad operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use rasterpad::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgb;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Rect};
    pub use crate::output::PngEncoder;
    pub use crate::primitive::Primitive;
    pub use crate::raster::{
        ClipAlgorithm, Curve, CurveAlgorithm, Ellipse, Line, LineAlgorithm, Polygon,
    };
    pub use crate::script::{parse_script, Command, Interpreter};
    pub use crate::transform::{rotate_point, scale_point, translate_point};
}
