//! Path accumulation and turtle geometry.
//!
//! [`PathAccumulator`] collects commands and serializes them to path data.
//! [`HeadingCursor`] adds position, pen state and a running bounding box on
//! top of any [`CommandSink`]. Both implement [`PathSink`], which is all a
//! shape generator needs.

mod cursor;
pub mod defaults;
mod sink;
pub mod trace;

use std::fmt;

use glam::DVec2;

use crate::command::Command;
use crate::errors::PathError;
use crate::log::{debug, warn};
use crate::parse;
use crate::shapes::{GeneratorRef, GeneratorRegistry, ShapeGenerator};
use crate::types::{Bounds, Delimiter, FormatOptions, StyleAttributes, StyleKey};

pub use cursor::{CursorConfig, HeadingCursor};
pub use sink::{CommandSink, Discard, PathSink, heading_delta};

/// Ordered, append-only list of path commands plus style attributes.
///
/// The list always starts with a zero relative move (`m 0 0`), so the output
/// is well formed even when the first real command is a line or a curve.
///
/// ```
/// use turtlepath::PathAccumulator;
///
/// let mut path = PathAccumulator::new();
/// path.stroke("salmon").move_absolute(4.0, 0.0).line(3.0, 0.0).close_path();
/// assert_eq!(path.build_path_string(), "m 0 0 M 4 0 l 3 0 Z");
/// ```
#[derive(Clone, Debug)]
pub struct PathAccumulator {
    commands: Vec<Command>,
    style: StyleAttributes,
    heading: f64,
    format: FormatOptions,
    registry: GeneratorRegistry,
}

impl Default for PathAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PathAccumulator {
    /// Create an accumulator with its own registry of built-in generators.
    pub fn new() -> Self {
        Self::with_registry(GeneratorRegistry::new())
    }

    /// Create an accumulator that resolves generator names in `registry`.
    pub fn with_registry(registry: GeneratorRegistry) -> Self {
        let mut acc = Self {
            commands: Vec::new(),
            style: StyleAttributes::default(),
            heading: defaults::HEADING,
            format: FormatOptions::default(),
            registry,
        };
        acc.clear();
        acc
    }

    /// Parse path data into a fresh accumulator.
    ///
    /// The parsed commands follow the usual leading `m 0 0`.
    pub fn from_path_data(text: &str) -> Result<Self, PathError> {
        let mut acc = Self::new();
        acc.extend_from_path_data(text)?;
        Ok(acc)
    }

    /// Parse path data and append the commands. Nothing is appended if the
    /// text does not parse.
    pub fn extend_from_path_data(&mut self, text: &str) -> Result<&mut Self, PathError> {
        let commands = parse::parse_path_data(text)?;
        self.commands.extend(commands);
        Ok(self)
    }

    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    pub fn set_delimiter(&mut self, delimiter: Delimiter) -> &mut Self {
        self.format.delimiter = delimiter;
        self
    }

    pub fn format(&self) -> FormatOptions {
        self.format
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Drop every command and the heading, keeping style and format.
    pub fn clear(&mut self) -> &mut Self {
        self.commands.clear();
        self.commands.push(Command::ORIGIN);
        self.heading = defaults::HEADING;
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of commands, including the leading move.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the list is empty (never true after construction).
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append any command.
    pub fn push(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn move_absolute(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(Command::MoveAbsolute { x, y })
    }

    pub fn move_relative(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.push(Command::MoveRelative { dx, dy })
    }

    pub fn line_absolute(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(Command::LineAbsolute { x, y })
    }

    pub fn line(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.push(Command::LineRelative { dx, dy })
    }

    pub fn horizontal_absolute(&mut self, x: f64) -> &mut Self {
        self.push(Command::HorizontalAbsolute { x })
    }

    pub fn horizontal(&mut self, dx: f64) -> &mut Self {
        self.push(Command::HorizontalRelative { dx })
    }

    pub fn vertical_absolute(&mut self, y: f64) -> &mut Self {
        self.push(Command::VerticalAbsolute { y })
    }

    pub fn vertical(&mut self, dy: f64) -> &mut Self {
        self.push(Command::VerticalRelative { dy })
    }

    /// Relative cubic Bézier (`c`).
    pub fn cubic_curve_to(
        &mut self,
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
        dx: f64,
        dy: f64,
    ) -> &mut Self {
        self.push(Command::CubicCurveRelative { dx1, dy1, dx2, dy2, dx, dy })
    }

    /// Absolute cubic Bézier (`C`).
    pub fn cubic_curve_to_global(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.push(Command::CubicCurveAbsolute { x1, y1, x2, y2, x, y })
    }

    /// Relative smooth cubic (`s`); the first control point is the reflection
    /// of the previous curve's second one.
    pub fn smooth_curve_to(&mut self, dx2: f64, dy2: f64, dx: f64, dy: f64) -> &mut Self {
        self.push(Command::SmoothCurveRelative { dx2, dy2, dx, dy })
    }

    /// Absolute smooth cubic (`S`).
    pub fn smooth_curve_to_global(&mut self, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.push(Command::SmoothCurveAbsolute { x2, y2, x, y })
    }

    /// Relative quadratic Bézier (`q`).
    pub fn quadratic_curve_to(&mut self, dx1: f64, dy1: f64, dx: f64, dy: f64) -> &mut Self {
        self.push(Command::QuadraticCurveRelative { dx1, dy1, dx, dy })
    }

    /// Absolute quadratic Bézier (`Q`).
    pub fn quadratic_curve_to_global(&mut self, x1: f64, y1: f64, x: f64, y: f64) -> &mut Self {
        self.push(Command::QuadraticCurveAbsolute { x1, y1, x, y })
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.push(Command::ClosePath)
    }

    /// Append `text` verbatim. No validation is performed.
    pub fn add_raw_fragment(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Command::RawFragment(text.into()))
    }

    pub fn style(&self) -> &StyleAttributes {
        &self.style
    }

    pub fn stroke(&mut self, color: impl Into<String>) -> &mut Self {
        self.style.set(StyleKey::Stroke, color);
        self
    }

    pub fn fill(&mut self, color: impl Into<String>) -> &mut Self {
        self.style.set(StyleKey::Fill, color);
        self
    }

    pub fn stroke_width(&mut self, width: impl Into<String>) -> &mut Self {
        self.style.set(StyleKey::StrokeWidth, width);
        self
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Add `degrees` to the heading. The heading is never normalized.
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        self.heading += degrees;
        self
    }

    pub fn set_heading(&mut self, degrees: f64) -> &mut Self {
        self.heading = degrees;
        self
    }

    /// Relative line of length `distance` along the heading.
    pub fn forward(&mut self, distance: f64) -> &mut Self {
        <Self as PathSink>::advance(self, distance);
        self
    }

    /// Run a shape generator against this accumulator.
    ///
    /// Names are resolved case-insensitively in [`Self::registry`]; a
    /// [`Generator`](crate::Generator) value runs directly. If resolution or
    /// the generator fails, the accumulator is left exactly as it was.
    ///
    /// ```
    /// use turtlepath::PathAccumulator;
    ///
    /// let mut path = PathAccumulator::new();
    /// path.apply_func("square", &[2.0])?.apply_func("SQUARE", &[4.0])?.close_path();
    /// assert_eq!(path.len(), 10);
    /// # Ok::<(), turtlepath::PathError>(())
    /// ```
    pub fn apply_func<'a>(
        &mut self,
        generator: impl Into<GeneratorRef<'a>>,
        args: &[f64],
    ) -> Result<&mut Self, PathError> {
        let generator = self.registry.resolve(generator.into())?;
        debug!(generator = generator.name(), ?args, "applying shape generator");

        let len = self.commands.len();
        let heading = self.heading;
        if let Err(err) = generator.invoke(self, args) {
            warn!(
                generator = generator.name(),
                error = %err,
                "shape generator failed, rolling back"
            );
            self.commands.truncate(len);
            self.heading = heading;
            return Err(err);
        }
        Ok(self)
    }

    /// Serialize all commands in order, joined by the configured delimiter.
    pub fn build_path_string(&self) -> String {
        let delimiter = self.format.delimiter.as_str();
        let mut out = String::new();
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push_str(delimiter);
            }
            command.write_to(&mut out, &self.format);
        }
        out
    }

    /// Pen position after the last command.
    pub fn current_point(&self) -> DVec2 {
        trace::trace(&self.commands).current
    }

    /// Box around everything drawn so far, control points included.
    pub fn bounds(&self) -> Bounds {
        trace::trace(&self.commands).bounds
    }
}

impl fmt::Display for PathAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_path_string())
    }
}

/// Single-letter path-data mnemonics.
#[allow(non_snake_case)]
impl PathAccumulator {
    pub fn M(&mut self, x: f64, y: f64) -> &mut Self {
        self.move_absolute(x, y)
    }

    pub fn m(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.move_relative(dx, dy)
    }

    pub fn L(&mut self, x: f64, y: f64) -> &mut Self {
        self.line_absolute(x, y)
    }

    pub fn l(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.line(dx, dy)
    }

    pub fn H(&mut self, x: f64) -> &mut Self {
        self.horizontal_absolute(x)
    }

    pub fn h(&mut self, dx: f64) -> &mut Self {
        self.horizontal(dx)
    }

    pub fn V(&mut self, y: f64) -> &mut Self {
        self.vertical_absolute(y)
    }

    pub fn v(&mut self, dy: f64) -> &mut Self {
        self.vertical(dy)
    }

    pub fn C(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.cubic_curve_to_global(x1, y1, x2, y2, x, y)
    }

    pub fn c(&mut self, dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx: f64, dy: f64) -> &mut Self {
        self.cubic_curve_to(dx1, dy1, dx2, dy2, dx, dy)
    }

    pub fn S(&mut self, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.smooth_curve_to_global(x2, y2, x, y)
    }

    pub fn s(&mut self, dx2: f64, dy2: f64, dx: f64, dy: f64) -> &mut Self {
        self.smooth_curve_to(dx2, dy2, dx, dy)
    }

    pub fn Q(&mut self, x1: f64, y1: f64, x: f64, y: f64) -> &mut Self {
        self.quadratic_curve_to_global(x1, y1, x, y)
    }

    pub fn q(&mut self, dx1: f64, dy1: f64, dx: f64, dy: f64) -> &mut Self {
        self.quadratic_curve_to(dx1, dy1, dx, dy)
    }

    pub fn Z(&mut self) -> &mut Self {
        self.close_path()
    }
}

impl CommandSink for PathAccumulator {
    fn emit(&mut self, command: Command) {
        self.commands.push(command);
    }

    fn command_count(&self) -> usize {
        self.commands.len()
    }

    fn truncate_commands(&mut self, len: usize) {
        self.commands.truncate(len);
    }
}

impl PathSink for PathAccumulator {
    fn heading(&self) -> f64 {
        self.heading
    }

    fn set_heading(&mut self, degrees: f64) {
        self.heading = degrees;
    }
}
