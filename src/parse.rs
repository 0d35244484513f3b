//! Parse path-data text into commands

use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::iterators::Pair;

use crate::command::Command;
use crate::errors::PathError;
use crate::log::warn;
use crate::path::defaults;
use crate::{PathDataParser, Rule};

/// Parse a path-data string such as `"M10,20 l 5 0 z"`.
///
/// Extra coordinate groups repeat the previous command, except after a move
/// where they become lines of the same absoluteness. `z` and `Z` both become
/// [`Command::ClosePath`]. Arcs (`A`/`a`) and the `T`/`t` shorthand are
/// rejected.
pub fn parse_path_data(source: &str) -> Result<Vec<Command>, PathError> {
    let pairs = PathDataParser::parse(Rule::path_data, source).map_err(|e| {
        let span = match e.location {
            pest::error::InputLocation::Pos(pos) => (pos, 0),
            pest::error::InputLocation::Span((start, end)) => (start, end - start),
        };
        invalid(source, span.into(), e.variant.message().into_owned())
    })?;

    let mut commands = Vec::new();
    for pair in pairs.flatten().filter(|p| p.as_rule() == Rule::command) {
        parse_command(pair, source, &mut commands)?;
    }
    Ok(commands)
}

fn parse_command(
    pair: Pair<'_, Rule>,
    source: &str,
    out: &mut Vec<Command>,
) -> Result<(), PathError> {
    let command_span = span_of(&pair);
    let mut inner = pair.into_inner();
    let Some(letter_pair) = inner.next() else {
        return Err(invalid(source, command_span, "missing command letter".into()));
    };
    let letter_span = span_of(&letter_pair);
    let letter = letter_pair.as_str().chars().next().unwrap_or_default();

    let mut numbers = Vec::new();
    for number in inner {
        let value = number
            .as_str()
            .parse::<f64>()
            .map_err(|e| invalid(source, span_of(&number), format!("bad number: {e}")))?;
        numbers.push(value);
    }

    let Some(arity) = arity(letter) else {
        return Err(invalid(source, letter_span, format!("unsupported command `{letter}`")));
    };

    if arity == 0 {
        if !numbers.is_empty() {
            return Err(invalid(source, command_span, format!("`{letter}` takes no numbers")));
        }
        out.push(Command::ClosePath);
        return Ok(());
    }

    if numbers.is_empty() || numbers.len() % arity != 0 {
        return Err(invalid(
            source,
            command_span,
            format!("`{letter}` takes groups of {arity} numbers, got {}", numbers.len()),
        ));
    }

    for (i, group) in numbers.chunks(arity).enumerate() {
        let letter = match letter {
            'M' if i > 0 => 'L',
            'm' if i > 0 => 'l',
            other => other,
        };
        let command = build(letter, group).ok_or_else(|| {
            invalid(source, command_span, format!("unsupported command `{letter}`"))
        })?;
        out.push(command);
    }
    Ok(())
}

/// Numbers per segment.
fn arity(letter: char) -> Option<usize> {
    match letter {
        'Z' | 'z' => Some(0),
        'H' | 'h' | 'V' | 'v' => Some(1),
        'M' | 'm' | 'L' | 'l' => Some(2),
        'S' | 's' | 'Q' | 'q' => Some(4),
        'C' | 'c' => Some(6),
        _ => None,
    }
}

fn build(letter: char, args: &[f64]) -> Option<Command> {
    let command = match (letter, args) {
        ('M', &[x, y]) => Command::MoveAbsolute { x, y },
        ('m', &[dx, dy]) => Command::MoveRelative { dx, dy },
        ('L', &[x, y]) => Command::LineAbsolute { x, y },
        ('l', &[dx, dy]) => Command::LineRelative { dx, dy },
        ('H', &[x]) => Command::HorizontalAbsolute { x },
        ('h', &[dx]) => Command::HorizontalRelative { dx },
        ('V', &[y]) => Command::VerticalAbsolute { y },
        ('v', &[dy]) => Command::VerticalRelative { dy },
        ('C', &[x1, y1, x2, y2, x, y]) => Command::CubicCurveAbsolute { x1, y1, x2, y2, x, y },
        ('c', &[dx1, dy1, dx2, dy2, dx, dy]) => {
            Command::CubicCurveRelative { dx1, dy1, dx2, dy2, dx, dy }
        }
        ('S', &[x2, y2, x, y]) => Command::SmoothCurveAbsolute { x2, y2, x, y },
        ('s', &[dx2, dy2, dx, dy]) => Command::SmoothCurveRelative { dx2, dy2, dx, dy },
        ('Q', &[x1, y1, x, y]) => Command::QuadraticCurveAbsolute { x1, y1, x, y },
        ('q', &[dx1, dy1, dx, dy]) => Command::QuadraticCurveRelative { dx1, dy1, dx, dy },
        _ => return None,
    };
    Some(command)
}

fn span_of(pair: &Pair<'_, Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start(), span.end() - span.start()).into()
}

fn invalid(source: &str, span: SourceSpan, message: String) -> PathError {
    warn!(%message, offset = span.offset(), "rejected path data");
    PathError::InvalidPathData {
        message,
        src: NamedSource::new(defaults::PATH_DATA_SOURCE_NAME, source.to_string()),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn round_trip(source: &str) -> String {
        parse_path_data(source)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn empty_input_has_no_commands() {
        assert!(parse_path_data("").unwrap().is_empty());
        assert!(parse_path_data("  \n\t ").unwrap().is_empty());
    }

    #[test]
    fn compact_and_comma_separated_forms() {
        insta::assert_snapshot!(
            round_trip("M10,20L30-40h.5v-1e1z"),
            @"M 10 20 L 30 -40 h 0.5 v -10 Z"
        );
    }

    #[test]
    fn repeated_groups_after_move_become_lines() {
        assert_eq!(round_trip("M 0 0 10 0 10 10"), "M 0 0 L 10 0 L 10 10");
        assert_eq!(round_trip("m 1 1 2 2"), "m 1 1 l 2 2");
        assert_eq!(round_trip("c 1 1 2 2 3 3 4 4 5 5 6 6"), "c 1 1 2 2 3 3 c 4 4 5 5 6 6");
    }

    #[test]
    fn quadratic_and_smooth_curves() {
        assert_eq!(round_trip("Q 1 2 3 4 s 5 6 7 8"), "Q 1 2 3 4 s 5 6 7 8");
    }

    #[test]
    fn lower_case_close_is_canonicalized() {
        assert_eq!(parse_path_data("z").unwrap(), vec![Command::ClosePath]);
    }

    #[test]
    fn wrong_group_size_points_at_command() {
        let err = parse_path_data("M 0 0 L 1 2 3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        match err {
            PathError::InvalidPathData { span, message, .. } => {
                assert_eq!(span.offset(), 6);
                assert_eq!(message, "`L` takes groups of 2 numbers, got 3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn arcs_are_unsupported() {
        match parse_path_data("M 0 0 A 5 5 0 0 1 10 10") {
            Err(PathError::InvalidPathData { span, message, .. }) => {
                assert_eq!(span.offset(), 6);
                assert_eq!(span.len(), 1);
                assert_eq!(message, "unsupported command `A`");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn close_with_numbers_is_rejected() {
        assert!(parse_path_data("Z 1").is_err());
    }

    #[test]
    fn syntax_error_is_located() {
        match parse_path_data("M 1 2 #") {
            Err(PathError::InvalidPathData { span, .. }) => assert_eq!(span.offset(), 6),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn leading_number_is_a_syntax_error() {
        assert!(parse_path_data("10 20").is_err());
    }
}
