//! Path commands and their canonical text form.

use std::fmt;

use crate::types::FormatOptions;

/// One instruction of the path-data mini-language.
///
/// Uppercase letters are absolute, lowercase are relative to the current point.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    MoveAbsolute { x: f64, y: f64 },
    MoveRelative { dx: f64, dy: f64 },
    LineAbsolute { x: f64, y: f64 },
    LineRelative { dx: f64, dy: f64 },
    HorizontalAbsolute { x: f64 },
    HorizontalRelative { dx: f64 },
    VerticalAbsolute { y: f64 },
    VerticalRelative { dy: f64 },
    CubicCurveAbsolute { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    CubicCurveRelative { dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx: f64, dy: f64 },
    SmoothCurveAbsolute { x2: f64, y2: f64, x: f64, y: f64 },
    SmoothCurveRelative { dx2: f64, dy2: f64, dx: f64, dy: f64 },
    QuadraticCurveAbsolute { x1: f64, y1: f64, x: f64, y: f64 },
    QuadraticCurveRelative { dx1: f64, dy1: f64, dx: f64, dy: f64 },
    ClosePath,
    /// Emitted verbatim, never validated.
    RawFragment(String),
}

impl Command {
    /// The zero-displacement move every path starts with.
    pub const ORIGIN: Command = Command::MoveRelative { dx: 0.0, dy: 0.0 };

    /// Path-data letter, or `None` for a raw fragment.
    pub fn letter(&self) -> Option<char> {
        let c = match self {
            Command::MoveAbsolute { .. } => 'M',
            Command::MoveRelative { .. } => 'm',
            Command::LineAbsolute { .. } => 'L',
            Command::LineRelative { .. } => 'l',
            Command::HorizontalAbsolute { .. } => 'H',
            Command::HorizontalRelative { .. } => 'h',
            Command::VerticalAbsolute { .. } => 'V',
            Command::VerticalRelative { .. } => 'v',
            Command::CubicCurveAbsolute { .. } => 'C',
            Command::CubicCurveRelative { .. } => 'c',
            Command::SmoothCurveAbsolute { .. } => 'S',
            Command::SmoothCurveRelative { .. } => 's',
            Command::QuadraticCurveAbsolute { .. } => 'Q',
            Command::QuadraticCurveRelative { .. } => 'q',
            Command::ClosePath => 'Z',
            Command::RawFragment(_) => return None,
        };
        Some(c)
    }

    /// Numeric arguments in path-data order.
    pub fn args(&self) -> Vec<f64> {
        match *self {
            Command::MoveAbsolute { x, y } | Command::LineAbsolute { x, y } => vec![x, y],
            Command::MoveRelative { dx, dy } | Command::LineRelative { dx, dy } => vec![dx, dy],
            Command::HorizontalAbsolute { x } => vec![x],
            Command::HorizontalRelative { dx } => vec![dx],
            Command::VerticalAbsolute { y } => vec![y],
            Command::VerticalRelative { dy } => vec![dy],
            Command::CubicCurveAbsolute { x1, y1, x2, y2, x, y } => vec![x1, y1, x2, y2, x, y],
            Command::CubicCurveRelative { dx1, dy1, dx2, dy2, dx, dy } => {
                vec![dx1, dy1, dx2, dy2, dx, dy]
            }
            Command::SmoothCurveAbsolute { x2, y2, x, y } => vec![x2, y2, x, y],
            Command::SmoothCurveRelative { dx2, dy2, dx, dy } => vec![dx2, dy2, dx, dy],
            Command::QuadraticCurveAbsolute { x1, y1, x, y } => vec![x1, y1, x, y],
            Command::QuadraticCurveRelative { dx1, dy1, dx, dy } => vec![dx1, dy1, dx, dy],
            Command::ClosePath | Command::RawFragment(_) => Vec::new(),
        }
    }

    /// Line-type commands draw a straight visible segment.
    pub fn is_line(&self) -> bool {
        matches!(
            self,
            Command::LineAbsolute { .. }
                | Command::LineRelative { .. }
                | Command::HorizontalAbsolute { .. }
                | Command::HorizontalRelative { .. }
                | Command::VerticalAbsolute { .. }
                | Command::VerticalRelative { .. }
        )
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Command::MoveAbsolute { .. } | Command::MoveRelative { .. })
    }

    /// Append the canonical text form to `out`.
    pub fn write_to(&self, out: &mut String, options: &FormatOptions) {
        let Some(letter) = self.letter() else {
            if let Command::RawFragment(text) = self {
                out.push_str(text);
            }
            return;
        };

        out.push(letter);
        for arg in self.args() {
            out.push(' ');
            out.push_str(&options.format(arg));
        }
    }

    /// Canonical text with the given options.
    pub fn to_text(&self, options: &FormatOptions) -> String {
        let mut out = String::new();
        self.write_to(&mut out, options);
        out
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&FormatOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero_relative_move() {
        assert_eq!(Command::ORIGIN.to_string(), "m 0 0");
    }

    #[test]
    fn canonical_text_per_variant() {
        let cases = [
            (Command::MoveAbsolute { x: 10.0, y: 20.0 }, "M 10 20"),
            (Command::LineRelative { dx: -1.5, dy: 0.0 }, "l -1.5 0"),
            (Command::HorizontalAbsolute { x: 3.0 }, "H 3"),
            (Command::VerticalRelative { dy: -4.0 }, "v -4"),
            (
                Command::CubicCurveAbsolute {
                    x1: 100.0,
                    y1: 100.0,
                    x2: 250.0,
                    y2: 100.0,
                    x: 250.0,
                    y: 200.0,
                },
                "C 100 100 250 100 250 200",
            ),
            (Command::SmoothCurveRelative { dx2: 1.0, dy2: 2.0, dx: 3.0, dy: 4.0 }, "s 1 2 3 4"),
            (Command::QuadraticCurveAbsolute { x1: 1.0, y1: 2.0, x: 3.0, y: 4.0 }, "Q 1 2 3 4"),
            (Command::ClosePath, "Z"),
            (Command::RawFragment("a 5 5 0 0 1 10 0".into()), "a 5 5 0 0 1 10 0"),
        ];
        for (cmd, expected) in cases {
            assert_eq!(cmd.to_string(), expected);
        }
    }

    #[test]
    fn precision_applies_to_every_argument() {
        let opts = FormatOptions {
            precision: Some(3),
            ..Default::default()
        };
        let cmd = Command::LineRelative { dx: 1.23456, dy: -0.000123456 };
        assert_eq!(cmd.to_text(&opts), "l 1.23 -0.000123");
    }

    #[test]
    fn classification() {
        assert!(Command::HorizontalRelative { dx: 1.0 }.is_line());
        assert!(!Command::MoveRelative { dx: 1.0, dy: 0.0 }.is_line());
        assert!(Command::MoveAbsolute { x: 1.0, y: 0.0 }.is_move());
        assert!(!Command::ClosePath.is_move());
        assert_eq!(Command::RawFragment("x".into()).letter(), None);
    }
}
