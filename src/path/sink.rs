//! The capability shared by everything that can be drawn into.
//!
//! Shape generators only ever see a `&mut dyn PathSink`, so the same rect,
//! grid and polygon code drives both a bare [`PathAccumulator`] and a
//! bounds-tracking [`HeadingCursor`].
//!
//! [`PathAccumulator`]: super::PathAccumulator
//! [`HeadingCursor`]: super::HeadingCursor

use glam::{DVec2, dvec2};

use crate::command::Command;

/// Anything that accepts path commands.
///
/// `command_count` and `truncate_commands` let a failed generator call be
/// undone without copying the sink.
pub trait CommandSink {
    fn emit(&mut self, command: Command);

    /// Commands held so far.
    fn command_count(&self) -> usize;

    /// Drop every command after the first `len`.
    fn truncate_commands(&mut self, len: usize);
}

impl CommandSink for Vec<Command> {
    fn emit(&mut self, command: Command) {
        self.push(command);
    }

    fn command_count(&self) -> usize {
        self.len()
    }

    fn truncate_commands(&mut self, len: usize) {
        self.truncate(len);
    }
}

/// Sink that drops every command. Useful when only the cursor's bounds and
/// position are wanted.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl CommandSink for Discard {
    fn emit(&mut self, _command: Command) {}

    fn command_count(&self) -> usize {
        0
    }

    fn truncate_commands(&mut self, _len: usize) {}
}

/// A command sink with a heading, so it can be driven turtle-style.
pub trait PathSink: CommandSink {
    /// Current heading in degrees. 0 points along +x, 90 along +y.
    fn heading(&self) -> f64;

    fn set_heading(&mut self, degrees: f64);

    /// Visible relative displacement.
    fn line_by(&mut self, dx: f64, dy: f64) {
        self.emit(Command::LineRelative { dx, dy });
    }

    /// Invisible relative displacement.
    fn move_by(&mut self, dx: f64, dy: f64) {
        self.emit(Command::MoveRelative { dx, dy });
    }

    fn turn(&mut self, degrees: f64) {
        let heading = self.heading();
        self.set_heading(heading + degrees);
    }

    /// Step `distance` along the current heading.
    fn advance(&mut self, distance: f64) {
        let delta = heading_delta(self.heading(), distance);
        self.line_by(delta.x, delta.y);
    }

    fn close(&mut self) {
        self.emit(Command::ClosePath);
    }
}

/// Displacement for stepping `distance` along `heading_degrees`.
pub fn heading_delta(heading_degrees: f64, distance: f64) -> DVec2 {
    let radians = heading_degrees.to_radians();
    dvec2(distance * radians.cos(), distance * radians.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        heading: f64,
        commands: Vec<Command>,
    }

    impl CommandSink for Recorder {
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

    impl PathSink for Recorder {
        fn heading(&self) -> f64 {
            self.heading
        }

        fn set_heading(&mut self, degrees: f64) {
            self.heading = degrees;
        }
    }

    #[test]
    fn heading_delta_cardinals() {
        let east = heading_delta(0.0, 2.0);
        assert_eq!(east, dvec2(2.0, 0.0));

        let south = heading_delta(90.0, 2.0);
        assert!(south.x.abs() < 1e-12);
        assert!((south.y - 2.0).abs() < 1e-12);

        let west = heading_delta(180.0, 1.0);
        assert!((west.x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_helpers_emit_relative_commands() {
        let mut sink = Recorder {
            heading: 0.0,
            commands: Vec::new(),
        };
        sink.advance(5.0);
        sink.turn(90.0);
        sink.move_by(1.0, 1.0);
        sink.close();

        assert_eq!(sink.heading, 90.0);
        assert_eq!(
            sink.commands,
            vec![
                Command::LineRelative { dx: 5.0, dy: 0.0 },
                Command::MoveRelative { dx: 1.0, dy: 1.0 },
                Command::ClosePath,
            ]
        );
    }

    #[test]
    fn vec_and_discard_are_sinks() {
        let mut v: Vec<Command> = Vec::new();
        v.emit(Command::ClosePath);
        v.emit(Command::ORIGIN);
        assert_eq!(v.command_count(), 2);
        v.truncate_commands(1);
        assert_eq!(v, [Command::ClosePath]);

        let mut d = Discard;
        d.emit(Command::ClosePath);
        assert_eq!(d.command_count(), 0);
    }
}
