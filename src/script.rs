//! Line-oriented drawing script parsing and execution.
//!
//! Provides the textual command format used to drive a [`Canvas`] without
//! the interactive shell.
//!
//! # Syntax
//!
//! One command per line, whitespace-separated fields:
//!
//! ```text
//! resetCanvas <w> <h>
//! saveCanvas <name>
//! setColor <r> <g> <b>
//! drawLine <id> <x0> <y0> <x1> <y1> <DDA|Bresenham>
//! drawPolygon <id> <x y>... <DDA|Bresenham>
//! drawEllipse <id> <x0> <y0> <x1> <y1>
//! drawCurve <id> <x y>... <Bezier|B-spline>
//! translate <id> <dx> <dy>
//! rotate <id> <x> <y> <deg>
//! scale <id> <x> <y> <s>
//! clip <id> <x0> <y0> <x1> <y1> <Cohen-Sutherland|Liang-Barsky>
//! ```
//!
//! Blank lines and unknown command words are skipped; a known command with
//! bad arity or a malformed argument fails with the 1-based line number.
//!
//! # Example
//!
//! ```
//! use rasterpad::script::parse_script;
//!
//! let commands = parse_script("setColor 255 0 0\ndrawLine l1 0 0 10 5 DDA").unwrap();
//! assert_eq!(commands.len(), 2);
//! ```

use std::path::PathBuf;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::primitive::Primitive;
use crate::raster::{ClipAlgorithm, Curve, CurveAlgorithm, Ellipse, Line, LineAlgorithm, Polygon};

/// A parsed drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Discard all primitives and resize the canvas.
    ResetCanvas {
        /// New canvas width.
        width: u32,
        /// New canvas height.
        height: u32,
    },
    /// Render the canvas and write `<name>.png` to the output directory.
    SaveCanvas {
        /// Output file stem.
        name: String,
    },
    /// Set the draw color for subsequently added primitives.
    SetColor(Rgb),
    /// Add a line segment.
    DrawLine {
        /// Primitive id.
        id: String,
        /// First endpoint.
        start: Point,
        /// Second endpoint.
        end: Point,
        /// Scan algorithm.
        algorithm: LineAlgorithm,
    },
    /// Add a polygon.
    DrawPolygon {
        /// Primitive id.
        id: String,
        /// Vertex ring.
        vertices: Vec<Point>,
        /// Scan algorithm shared by the edges.
        algorithm: LineAlgorithm,
    },
    /// Add an ellipse inscribed in a corner-spanned box.
    DrawEllipse {
        /// Primitive id.
        id: String,
        /// One box corner.
        corner0: Point,
        /// The opposite box corner.
        corner1: Point,
    },
    /// Add a curve.
    DrawCurve {
        /// Primitive id.
        id: String,
        /// Control points.
        control: Vec<Point>,
        /// Evaluation algorithm.
        algorithm: CurveAlgorithm,
    },
    /// Translate a primitive.
    Translate {
        /// Primitive id.
        id: String,
        /// Horizontal delta.
        dx: i32,
        /// Vertical delta.
        dy: i32,
    },
    /// Rotate a primitive about a pivot.
    Rotate {
        /// Primitive id.
        id: String,
        /// Rotation pivot.
        pivot: Point,
        /// Angle in degrees.
        degrees: i32,
    },
    /// Scale a primitive toward a pivot.
    Scale {
        /// Primitive id.
        id: String,
        /// Scale pivot.
        pivot: Point,
        /// Uniform scale factor.
        factor: f64,
    },
    /// Clip a line primitive against a window.
    Clip {
        /// Primitive id.
        id: String,
        /// Clip window.
        window: Rect,
        /// Clipping algorithm.
        algorithm: ClipAlgorithm,
    },
}

/// Parse a whole script into commands.
///
/// # Errors
///
/// Returns [`Error::Script`] with the offending 1-based line number for any
/// known command with bad arity or malformed arguments.
pub fn parse_script(source: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let Some((&word, args)) = tokens.split_first() else {
            continue;
        };
        if let Some(command) = parse_command(word, args, line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

fn parse_command(word: &str, args: &[&str], line: usize) -> Result<Option<Command>> {
    let command = match word {
        "resetCanvas" => {
            arity(word, args, 2, line)?;
            Command::ResetCanvas {
                width: dimension(args[0], line)?,
                height: dimension(args[1], line)?,
            }
        }
        "saveCanvas" => {
            arity(word, args, 1, line)?;
            Command::SaveCanvas {
                name: args[0].to_string(),
            }
        }
        "setColor" => {
            arity(word, args, 3, line)?;
            Command::SetColor(Rgb::new(
                byte(args[0], line)?,
                byte(args[1], line)?,
                byte(args[2], line)?,
            ))
        }
        "drawLine" => {
            arity(word, args, 6, line)?;
            Command::DrawLine {
                id: args[0].to_string(),
                start: point(args[1], args[2], line)?,
                end: point(args[3], args[4], line)?,
                algorithm: line_algorithm(args[5], line)?,
            }
        }
        "drawPolygon" => {
            let (id, vertices, selector) = id_points_selector(word, args, line)?;
            Command::DrawPolygon {
                id,
                vertices,
                algorithm: line_algorithm(selector, line)?,
            }
        }
        "drawEllipse" => {
            arity(word, args, 5, line)?;
            Command::DrawEllipse {
                id: args[0].to_string(),
                corner0: point(args[1], args[2], line)?,
                corner1: point(args[3], args[4], line)?,
            }
        }
        "drawCurve" => {
            let (id, control, selector) = id_points_selector(word, args, line)?;
            Command::DrawCurve {
                id,
                control,
                algorithm: curve_algorithm(selector, line)?,
            }
        }
        "translate" => {
            arity(word, args, 3, line)?;
            Command::Translate {
                id: args[0].to_string(),
                dx: integer(args[1], line)?,
                dy: integer(args[2], line)?,
            }
        }
        "rotate" => {
            arity(word, args, 4, line)?;
            Command::Rotate {
                id: args[0].to_string(),
                pivot: point(args[1], args[2], line)?,
                degrees: integer(args[3], line)?,
            }
        }
        "scale" => {
            arity(word, args, 4, line)?;
            Command::Scale {
                id: args[0].to_string(),
                pivot: point(args[1], args[2], line)?,
                factor: float(args[3], line)?,
            }
        }
        "clip" => {
            arity(word, args, 6, line)?;
            Command::Clip {
                id: args[0].to_string(),
                window: Rect::from_corners(
                    point(args[1], args[2], line)?,
                    point(args[3], args[4], line)?,
                ),
                algorithm: clip_algorithm(args[5], line)?,
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(command))
}

/// Shared shape of `drawPolygon`/`drawCurve`: an id, one or more coordinate
/// pairs, and a trailing algorithm selector.
fn id_points_selector<'a>(
    word: &str,
    args: &[&'a str],
    line: usize,
) -> Result<(String, Vec<Point>, &'a str)> {
    if args.len() < 4 || (args.len() - 2) % 2 != 0 {
        return Err(script_error(
            line,
            format!("{word} expects an id, coordinate pairs and an algorithm"),
        ));
    }
    let mut points = Vec::with_capacity((args.len() - 2) / 2);
    for pair in args[1..args.len() - 1].chunks_exact(2) {
        points.push(point(pair[0], pair[1], line)?);
    }
    Ok((args[0].to_string(), points, args[args.len() - 1]))
}

fn script_error(line: usize, message: impl Into<String>) -> Error {
    Error::Script {
        line,
        message: message.into(),
    }
}

fn arity(word: &str, args: &[&str], expected: usize, line: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(script_error(
            line,
            format!(
                "{word} expects {expected} arguments, got {}",
                args.len()
            ),
        ))
    }
}

fn integer(token: &str, line: usize) -> Result<i32> {
    token
        .parse()
        .map_err(|_| script_error(line, format!("expected integer, got '{token}'")))
}

fn point(x: &str, y: &str, line: usize) -> Result<Point> {
    Ok(Point::new(integer(x, line)?, integer(y, line)?))
}

fn dimension(token: &str, line: usize) -> Result<u32> {
    token
        .parse()
        .map_err(|_| script_error(line, format!("expected dimension, got '{token}'")))
}

fn byte(token: &str, line: usize) -> Result<u8> {
    token
        .parse()
        .map_err(|_| script_error(line, format!("expected color component 0-255, got '{token}'")))
}

fn float(token: &str, line: usize) -> Result<f64> {
    token
        .parse()
        .map_err(|_| script_error(line, format!("expected number, got '{token}'")))
}

fn line_algorithm(token: &str, line: usize) -> Result<LineAlgorithm> {
    match token {
        "DDA" => Ok(LineAlgorithm::Dda),
        "Bresenham" => Ok(LineAlgorithm::Bresenham),
        _ => Err(script_error(
            line,
            format!("unknown line algorithm '{token}'"),
        )),
    }
}

fn curve_algorithm(token: &str, line: usize) -> Result<CurveAlgorithm> {
    match token {
        "Bezier" => Ok(CurveAlgorithm::Bezier),
        "B-spline" => Ok(CurveAlgorithm::BSpline),
        _ => Err(script_error(
            line,
            format!("unknown curve algorithm '{token}'"),
        )),
    }
}

fn clip_algorithm(token: &str, line: usize) -> Result<ClipAlgorithm> {
    match token {
        "Cohen-Sutherland" => Ok(ClipAlgorithm::CohenSutherland),
        "Liang-Barsky" => Ok(ClipAlgorithm::LiangBarsky),
        _ => Err(script_error(
            line,
            format!("unknown clip algorithm '{token}'"),
        )),
    }
}

/// Executes parsed commands against a canvas, writing snapshots into an
/// output directory.
#[derive(Debug)]
pub struct Interpreter {
    canvas: Canvas,
    output_dir: PathBuf,
}

impl Interpreter {
    /// Default canvas size before the first `resetCanvas`.
    pub const DEFAULT_SIZE: u32 = 1000;

    /// Create an interpreter writing snapshots into `output_dir`.
    ///
    /// # Errors
    ///
    /// Never fails for the default canvas size; the `Result` keeps the
    /// constructor aligned with [`Canvas::new`].
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            canvas: Canvas::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE)?,
            output_dir: output_dir.into(),
        })
    }

    /// The canvas being driven.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Execute one command.
    ///
    /// # Errors
    ///
    /// Surfaces construction validation errors and snapshot I/O errors.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::ResetCanvas { width, height } => self.canvas.reset(width, height),
            Command::SaveCanvas { name } => {
                let path = self.output_dir.join(format!("{name}.png"));
                self.canvas.save_png(path)
            }
            Command::SetColor(color) => {
                self.canvas.set_color(color);
                Ok(())
            }
            Command::DrawLine {
                id,
                start,
                end,
                algorithm,
            } => {
                self.canvas
                    .add(id, Primitive::from(Line::new(start, end, algorithm)));
                Ok(())
            }
            Command::DrawPolygon {
                id,
                vertices,
                algorithm,
            } => {
                let polygon = Polygon::new(&vertices, algorithm)?;
                self.canvas.add(id, Primitive::from(polygon));
                Ok(())
            }
            Command::DrawEllipse {
                id,
                corner0,
                corner1,
            } => {
                let ellipse = Ellipse::from_corners(corner0.x, corner0.y, corner1.x, corner1.y);
                self.canvas.add(id, Primitive::from(ellipse));
                Ok(())
            }
            Command::DrawCurve {
                id,
                control,
                algorithm,
            } => {
                let curve = Curve::new(control, algorithm)?;
                self.canvas.add(id, Primitive::from(curve));
                Ok(())
            }
            Command::Translate { id, dx, dy } => {
                self.canvas.translate(&id, dx, dy);
                Ok(())
            }
            Command::Rotate {
                id,
                pivot,
                degrees,
            } => {
                self.canvas.rotate(&id, pivot, degrees);
                Ok(())
            }
            Command::Scale { id, pivot, factor } => {
                self.canvas.scale(&id, pivot, factor);
                Ok(())
            }
            Command::Clip {
                id,
                window,
                algorithm,
            } => {
                self.canvas.clip(&id, window, algorithm);
                Ok(())
            }
        }
    }

    /// Parse and execute a whole script.
    ///
    /// # Errors
    ///
    /// Fails on the first parse or execution error.
    pub fn run(&mut self, source: &str) -> Result<()> {
        for command in parse_script(source)? {
            self.execute(command)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draw_line() {
        let commands = parse_script("drawLine l1 0 0 10 5 DDA").unwrap();
        assert_eq!(
            commands,
            vec![Command::DrawLine {
                id: "l1".into(),
                start: Point::new(0, 0),
                end: Point::new(10, 5),
                algorithm: LineAlgorithm::Dda,
            }]
        );
    }

    #[test]
    fn test_parse_polygon_pairs() {
        let commands = parse_script("drawPolygon p 0 0 10 0 10 10 Bresenham").unwrap();
        assert_eq!(
            commands,
            vec![Command::DrawPolygon {
                id: "p".into(),
                vertices: vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)],
                algorithm: LineAlgorithm::Bresenham,
            }]
        );
    }

    #[test]
    fn test_parse_curve_selector() {
        let commands = parse_script("drawCurve c 0 0 5 9 10 0 B-spline").unwrap();
        match &commands[0] {
            Command::DrawCurve {
                control, algorithm, ..
            } => {
                assert_eq!(control.len(), 3);
                assert_eq!(*algorithm, CurveAlgorithm::BSpline);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_clip_normalizes_window() {
        let commands = parse_script("clip l 10 10 0 0 Liang-Barsky").unwrap();
        assert_eq!(
            commands,
            vec![Command::Clip {
                id: "l".into(),
                window: Rect::new(0, 0, 10, 10),
                algorithm: ClipAlgorithm::LiangBarsky,
            }]
        );
    }

    #[test]
    fn test_blank_lines_and_unknown_words_are_skipped() {
        let source = "\n\nsetPixel 1 2\nsetColor 1 2 3\n";
        let commands = parse_script(source).unwrap();
        assert_eq!(commands, vec![Command::SetColor(Rgb::new(1, 2, 3))]);
    }

    #[test]
    fn test_bad_arity_reports_line_number() {
        let source = "setColor 0 0 0\ndrawLine l1 0 0 10 5";
        let err = parse_script(source).unwrap_err();
        assert!(matches!(err, Error::Script { line: 2, .. }));
    }

    #[test]
    fn test_bad_integer_reports_token() {
        let err = parse_script("translate l1 five 0").unwrap_err();
        assert!(err.to_string().contains("five"));
    }

    #[test]
    fn test_unknown_selector_is_an_error() {
        assert!(parse_script("drawLine l 0 0 1 1 Wu").is_err());
        assert!(parse_script("drawCurve c 0 0 1 1 Hermite").is_err());
        assert!(parse_script("clip l 0 0 1 1 Sutherland-Hodgman").is_err());
    }

    #[test]
    fn test_execute_draw_and_transform() {
        let mut interpreter = Interpreter::new("unused").unwrap();
        interpreter
            .run("resetCanvas 50 50\nsetColor 255 0 0\ndrawLine l 0 10 49 10 DDA\ntranslate l 0 5")
            .unwrap();
        assert_eq!(interpreter.canvas().len(), 1);
        assert_eq!(interpreter.canvas().width(), 50);
    }

    #[test]
    fn test_execute_curve_with_one_point_fails() {
        let mut interpreter = Interpreter::new("unused").unwrap();
        let result = interpreter.run("drawCurve c 5 5 Bezier");
        assert!(matches!(
            result,
            Err(Error::TooFewControlPoints { count: 1 })
        ));
    }
}
