//! Turtle cursor: position, heading, pen state and a running bounding box.

use glam::{DVec2, dvec2};

use super::{CommandSink, PathAccumulator, PathSink, defaults, heading_delta};
use crate::command::Command;
use crate::errors::PathError;
use crate::log::{debug, warn};
use crate::shapes::{GeneratorRef, GeneratorRegistry, ShapeGenerator, builtin};
use crate::types::Bounds;

/// Cursor behaviour switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorConfig {
    /// Grow the bounds after every displacement. When off, call
    /// [`HeadingCursor::resize`] to fold the current position in.
    pub auto_resize: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            auto_resize: defaults::AUTO_RESIZE,
        }
    }
}

/// A turtle that emits relative path commands into a sink.
///
/// Every displacement (`forward`, `goto`, `teleport`, and anything a shape
/// generator does) goes through one primitive: append `l dx dy` when the pen
/// is down or `m dx dy` when it is up, move the position, grow the bounds.
///
/// ```
/// use turtlepath::HeadingCursor;
///
/// let mut turtle = HeadingCursor::new();
/// turtle.forward(10.0).goto(10.0, 5.0).teleport(0.0, 0.0);
/// assert_eq!(turtle.bounds().width(), 10.0);
/// assert_eq!(turtle.path_string(), "m 0 0 l 10 0 l 0 5 m -10 -5");
/// ```
#[derive(Clone, Debug)]
pub struct HeadingCursor<S: CommandSink = PathAccumulator> {
    position: DVec2,
    subpath_start: DVec2,
    heading: f64,
    pen_down: bool,
    bounds: Bounds,
    config: CursorConfig,
    sink: S,
    registry: GeneratorRegistry,
}

impl HeadingCursor {
    /// Cursor drawing into a fresh accumulator. Cursor and accumulator share
    /// one built-in registry.
    pub fn new() -> Self {
        let registry = GeneratorRegistry::new();
        HeadingCursor::with_sink(PathAccumulator::with_registry(registry.clone()))
            .with_registry(registry)
    }

    pub fn path_string(&self) -> String {
        self.sink.build_path_string()
    }

    /// Path string prefixed with a move that shifts the drawing so its
    /// bounds start at the origin, ready for a `0 0 width height` viewport.
    pub fn fitted_path_string(&self) -> String {
        let format = self.sink.format();
        let shift = Command::MoveRelative {
            dx: -self.bounds.min.x,
            dy: -self.bounds.min.y,
        };
        let mut out = shift.to_text(&format);
        out.push_str(format.delimiter.as_str());
        out.push_str(&self.path_string());
        out
    }
}

impl Default for HeadingCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CommandSink> HeadingCursor<S> {
    /// Cursor at the origin, heading 0, pen down, emitting into `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            position: DVec2::ZERO,
            subpath_start: DVec2::ZERO,
            heading: defaults::HEADING,
            pen_down: true,
            bounds: Bounds::default(),
            config: CursorConfig::default(),
            sink,
            registry: GeneratorRegistry::new(),
        }
    }

    pub fn with_registry(mut self, registry: GeneratorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_config(mut self, config: CursorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    pub fn config(&self) -> CursorConfig {
        self.config
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink, e.g. to set style on an accumulator.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn pen_up(&mut self) -> &mut Self {
        self.pen_down = false;
        self
    }

    pub fn pen_down(&mut self) -> &mut Self {
        self.pen_down = true;
        self
    }

    /// Add to the heading. Never normalized.
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        self.heading += degrees;
        self
    }

    pub fn set_heading(&mut self, degrees: f64) -> &mut Self {
        self.heading = degrees;
        self
    }

    pub fn forward(&mut self, distance: f64) -> &mut Self {
        self.step(heading_delta(self.heading, distance));
        self
    }

    /// Move to `(x, y)`, drawing if the pen is down.
    pub fn goto(&mut self, x: f64, y: f64) -> &mut Self {
        self.step(dvec2(x, y) - self.position);
        self
    }

    /// Move to `(x, y)` without drawing, whatever the pen state.
    pub fn teleport(&mut self, x: f64, y: f64) -> &mut Self {
        let pen_down = self.pen_down;
        self.pen_down = false;
        self.goto(x, y);
        self.pen_down = pen_down;
        self
    }

    /// Grow the bounds to the current position.
    pub fn resize(&mut self) -> &mut Self {
        self.bounds.expand_point(self.position);
        self
    }

    /// Regular polygon from the current position and heading.
    pub fn polygon(&mut self, size: f64, sides: f64) -> &mut Self {
        builtin::polygon(&mut *self, size, sides);
        self
    }

    fn step(&mut self, delta: DVec2) {
        self.position += delta;
        let command = if self.pen_down {
            Command::LineRelative { dx: delta.x, dy: delta.y }
        } else {
            self.subpath_start = self.position;
            Command::MoveRelative { dx: delta.x, dy: delta.y }
        };
        self.sink.emit(command);
        if self.config.auto_resize {
            self.bounds.expand_point(self.position);
        }
    }
}

impl<S: CommandSink> HeadingCursor<S> {
    /// Run a shape generator with this cursor as the sink.
    ///
    /// Pen-up hops a generator makes count towards the bounds like any other
    /// displacement. On failure the cursor state is restored and the sink is
    /// truncated back to where it was.
    pub fn apply_func<'a>(
        &mut self,
        generator: impl Into<GeneratorRef<'a>>,
        args: &[f64],
    ) -> Result<&mut Self, PathError> {
        let generator = self.registry.resolve(generator.into())?;
        debug!(generator = generator.name(), ?args, "applying shape generator to cursor");

        let checkpoint = self.checkpoint();
        if let Err(err) = generator.invoke(self, args) {
            warn!(
                generator = generator.name(),
                error = %err,
                "shape generator failed, restoring cursor"
            );
            self.restore(checkpoint);
            return Err(err);
        }
        Ok(self)
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            subpath_start: self.subpath_start,
            heading: self.heading,
            pen_down: self.pen_down,
            bounds: self.bounds,
            commands: self.sink.command_count(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
        self.subpath_start = checkpoint.subpath_start;
        self.heading = checkpoint.heading;
        self.pen_down = checkpoint.pen_down;
        self.bounds = checkpoint.bounds;
        self.sink.truncate_commands(checkpoint.commands);
    }

    /// Emit a relative curve ending at `delta`, or just move there when the
    /// pen is up. Control points are relative to the current position.
    fn curve_by(&mut self, command: Command, controls: &[DVec2], delta: DVec2) {
        if !self.pen_down {
            self.step(delta);
            return;
        }
        let origin = self.position;
        self.position += delta;
        self.sink.emit(command);
        if self.config.auto_resize {
            for control in controls {
                self.bounds.expand_point(origin + *control);
            }
            self.bounds.expand_point(self.position);
        }
    }
}

/// Cursor state captured before a generator runs.
#[derive(Clone, Copy)]
struct Checkpoint {
    position: DVec2,
    subpath_start: DVec2,
    heading: f64,
    pen_down: bool,
    bounds: Bounds,
    commands: usize,
}

/// Every command is resolved against the cursor position: lines and moves,
/// absolute or not, become displacements; curves are re-emitted in relative
/// form. Only raw fragments reach the sink untouched.
impl<S: CommandSink> CommandSink for HeadingCursor<S> {
    fn emit(&mut self, command: Command) {
        let at = self.position;
        match command {
            Command::LineRelative { dx, dy } => self.line_by(dx, dy),
            Command::LineAbsolute { x, y } => self.line_by(x - at.x, y - at.y),
            Command::HorizontalRelative { dx } => self.line_by(dx, 0.0),
            Command::HorizontalAbsolute { x } => self.line_by(x - at.x, 0.0),
            Command::VerticalRelative { dy } => self.line_by(0.0, dy),
            Command::VerticalAbsolute { y } => self.line_by(0.0, y - at.y),
            Command::MoveRelative { dx, dy } => self.move_by(dx, dy),
            Command::MoveAbsolute { x, y } => self.move_by(x - at.x, y - at.y),
            Command::CubicCurveRelative { dx1, dy1, dx2, dy2, dx, dy } => self.curve_by(
                command,
                &[dvec2(dx1, dy1), dvec2(dx2, dy2)],
                dvec2(dx, dy),
            ),
            Command::CubicCurveAbsolute { x1, y1, x2, y2, x, y } => {
                let (c1, c2, end) = (dvec2(x1, y1) - at, dvec2(x2, y2) - at, dvec2(x, y) - at);
                let relative = Command::CubicCurveRelative {
                    dx1: c1.x,
                    dy1: c1.y,
                    dx2: c2.x,
                    dy2: c2.y,
                    dx: end.x,
                    dy: end.y,
                };
                self.curve_by(relative, &[c1, c2], end);
            }
            Command::SmoothCurveRelative { dx2, dy2, dx, dy } => {
                self.curve_by(command, &[dvec2(dx2, dy2)], dvec2(dx, dy));
            }
            Command::SmoothCurveAbsolute { x2, y2, x, y } => {
                let (c2, end) = (dvec2(x2, y2) - at, dvec2(x, y) - at);
                let relative = Command::SmoothCurveRelative {
                    dx2: c2.x,
                    dy2: c2.y,
                    dx: end.x,
                    dy: end.y,
                };
                self.curve_by(relative, &[c2], end);
            }
            Command::QuadraticCurveRelative { dx1, dy1, dx, dy } => {
                self.curve_by(command, &[dvec2(dx1, dy1)], dvec2(dx, dy));
            }
            Command::QuadraticCurveAbsolute { x1, y1, x, y } => {
                let (c1, end) = (dvec2(x1, y1) - at, dvec2(x, y) - at);
                let relative = Command::QuadraticCurveRelative {
                    dx1: c1.x,
                    dy1: c1.y,
                    dx: end.x,
                    dy: end.y,
                };
                self.curve_by(relative, &[c1], end);
            }
            Command::ClosePath => self.close(),
            Command::RawFragment(_) => self.sink.emit(command),
        }
    }

    fn command_count(&self) -> usize {
        self.sink.command_count()
    }

    fn truncate_commands(&mut self, len: usize) {
        self.sink.truncate_commands(len);
    }
}

impl<S: CommandSink> PathSink for HeadingCursor<S> {
    fn heading(&self) -> f64 {
        self.heading
    }

    fn set_heading(&mut self, degrees: f64) {
        self.heading = degrees;
    }

    fn line_by(&mut self, dx: f64, dy: f64) {
        self.step(dvec2(dx, dy));
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        let pen_down = self.pen_down;
        self.pen_down = false;
        self.step(dvec2(dx, dy));
        self.pen_down = pen_down;
    }

    fn close(&mut self) {
        self.sink.emit(Command::ClosePath);
        self.position = self.subpath_start;
    }
}
