//! Built-in composite shapes.
//!
//! Each shape is written once against [`PathSink`] and only uses relative
//! displacements, so shapes compose: a square drawn after a grid starts
//! wherever the grid left the pen.

use crate::path::{PathSink, defaults};

/// Rectangle outline from the current point. Leaves the pen where it started
/// and does not close the subpath.
pub fn rect<S: PathSink + ?Sized>(sink: &mut S, width: f64, height: f64) {
    sink.line_by(width, 0.0);
    sink.line_by(0.0, height);
    sink.line_by(-width, 0.0);
    sink.line_by(0.0, -height);
}

pub fn square<S: PathSink + ?Sized>(sink: &mut S, size: f64) {
    rect(sink, size, size);
}

/// `rows * cols` squares laid out row-major.
///
/// Cells are separated by `padding_size * 0.7`. Between cells the pen hops
/// right; at the end of every row but the last it walks back by the distance
/// that row travelled and drops one cell down. The pen finishes at the top-left
/// corner of the last cell.
pub fn grid<S: PathSink + ?Sized>(
    sink: &mut S,
    rows: f64,
    cols: f64,
    size: f64,
    padding_size: f64,
) {
    let padding = padding_size * defaults::GRID_PADDING_SCALE;
    let step = size + padding;
    let rows = repeat_count(rows);
    let cols = repeat_count(cols);

    for row in 0..rows {
        let mut row_offset = 0.0;
        for col in 0..cols {
            square(sink, size);
            if col + 1 < cols {
                sink.move_by(step, 0.0);
                row_offset += step;
            }
        }
        if row + 1 < rows {
            sink.move_by(-row_offset, step);
        }
    }
}

/// Regular polygon traced turtle-style: `sides` times step forward `length`
/// and turn by the exterior angle `360 / sides`.
///
/// Floating-point drift can leave a tiny gap between the last and first
/// vertex.
pub fn polygon<S: PathSink + ?Sized>(sink: &mut S, length: f64, sides: f64) {
    let exterior = 360.0 / sides;
    for _ in 0..repeat_count(sides) {
        sink.advance(length);
        sink.turn(exterior);
    }
}

/// Iterations of a `for (i = 0; i < n; i++)` loop over a float bound.
fn repeat_count(n: f64) -> usize {
    if n > 0.0 { n.ceil() as usize } else { 0 }
}
