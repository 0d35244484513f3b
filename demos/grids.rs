//! Grids of squares with growing padding, stacked vertically.

use tracing::info;
use turtlepath::{HeadingCursor, PathAccumulator, StyleKey};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut turtle = HeadingCursor::new();
    turtle.sink_mut().stroke("hsl( 200 50% 50% / 1.0)").fill("transparent");

    for (row, padding) in [0.0, 2.0, 5.0, 10.0].into_iter().enumerate() {
        turtle.teleport(0.0, row as f64 * 40.0);
        turtle.apply_func("grid", &[2.0, 6.0, 10.0, padding])?;
        info!(row, padding, position = ?turtle.position(), "grid drawn");
    }

    let bounds = turtle.bounds();
    let mut path = PathAccumulator::from_path_data(&turtle.fitted_path_string())?;
    for (key, value) in turtle.sink().style().iter() {
        match key {
            StyleKey::Stroke => path.stroke(value),
            StyleKey::Fill => path.fill(value),
            StyleKey::StrokeWidth => path.stroke_width(value),
        };
    }

    println!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
            "  <path d=\"{}\" stroke=\"{}\" fill=\"{}\"/>\n",
            "</svg>",
        ),
        bounds.width(),
        bounds.height(),
        path,
        path.style().stroke().unwrap_or("black"),
        path.style().fill().unwrap_or("none"),
    );
    Ok(())
}
