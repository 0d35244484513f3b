//! Walk a command list to find where the pen ends up and which area the
//! drawing covers.

use glam::{DVec2, dvec2};

use crate::command::Command;
use crate::types::Bounds;

/// Result of walking a command list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trace {
    /// Pen position after the last command.
    pub current: DVec2,
    /// Box around every drawn segment's end points and control points.
    /// Pure moves only count once something is drawn from them; a list with
    /// nothing drawn yields a degenerate box at `current`.
    pub bounds: Bounds,
}

/// Walk `commands` from the origin.
///
/// Raw fragments are opaque and leave the pen where it was.
pub fn trace(commands: &[Command]) -> Trace {
    let mut tracer = Tracer::default();
    for command in commands {
        tracer.step(command);
    }
    Trace {
        current: tracer.current,
        bounds: tracer.bounds.unwrap_or(Bounds::at(tracer.current)),
    }
}

#[derive(Default)]
struct Tracer {
    current: DVec2,
    subpath_start: DVec2,
    /// Second control point of the previous cubic, for smooth curves.
    last_cubic_control: Option<DVec2>,
    bounds: Option<Bounds>,
}

impl Tracer {
    fn step(&mut self, command: &Command) {
        let origin = self.current;
        let mut cubic_control = None;

        match *command {
            Command::MoveAbsolute { x, y } => self.move_to(dvec2(x, y)),
            Command::MoveRelative { dx, dy } => self.move_to(origin + dvec2(dx, dy)),
            Command::LineAbsolute { x, y } => self.draw_to(&[], dvec2(x, y)),
            Command::LineRelative { dx, dy } => self.draw_to(&[], origin + dvec2(dx, dy)),
            Command::HorizontalAbsolute { x } => self.draw_to(&[], dvec2(x, origin.y)),
            Command::HorizontalRelative { dx } => self.draw_to(&[], origin + dvec2(dx, 0.0)),
            Command::VerticalAbsolute { y } => self.draw_to(&[], dvec2(origin.x, y)),
            Command::VerticalRelative { dy } => self.draw_to(&[], origin + dvec2(0.0, dy)),
            Command::CubicCurveAbsolute { x1, y1, x2, y2, x, y } => {
                let c2 = dvec2(x2, y2);
                self.draw_to(&[dvec2(x1, y1), c2], dvec2(x, y));
                cubic_control = Some(c2);
            }
            Command::CubicCurveRelative { dx1, dy1, dx2, dy2, dx, dy } => {
                let c2 = origin + dvec2(dx2, dy2);
                self.draw_to(&[origin + dvec2(dx1, dy1), c2], origin + dvec2(dx, dy));
                cubic_control = Some(c2);
            }
            Command::SmoothCurveAbsolute { x2, y2, x, y } => {
                let c1 = self.reflected_control();
                let c2 = dvec2(x2, y2);
                self.draw_to(&[c1, c2], dvec2(x, y));
                cubic_control = Some(c2);
            }
            Command::SmoothCurveRelative { dx2, dy2, dx, dy } => {
                let c1 = self.reflected_control();
                let c2 = origin + dvec2(dx2, dy2);
                self.draw_to(&[c1, c2], origin + dvec2(dx, dy));
                cubic_control = Some(c2);
            }
            Command::QuadraticCurveAbsolute { x1, y1, x, y } => {
                self.draw_to(&[dvec2(x1, y1)], dvec2(x, y));
            }
            Command::QuadraticCurveRelative { dx1, dy1, dx, dy } => {
                self.draw_to(&[origin + dvec2(dx1, dy1)], origin + dvec2(dx, dy));
            }
            Command::ClosePath => {
                let start = self.subpath_start;
                self.draw_to(&[], start);
            }
            Command::RawFragment(_) => {}
        }

        self.last_cubic_control = cubic_control;
    }

    fn move_to(&mut self, point: DVec2) {
        self.current = point;
        self.subpath_start = point;
    }

    fn draw_to(&mut self, controls: &[DVec2], end: DVec2) {
        let bounds = self.bounds.get_or_insert(Bounds::at(self.current));
        bounds.expand_point(self.current);
        for control in controls {
            bounds.expand_point(*control);
        }
        bounds.expand_point(end);
        self.current = end;
    }

    /// First control point of a smooth curve: the previous cubic's second
    /// control point mirrored through the current point, or the current
    /// point itself.
    fn reflected_control(&self) -> DVec2 {
        match self.last_cubic_control {
            Some(control) => 2.0 * self.current - control,
            None => self.current,
        }
    }
}
