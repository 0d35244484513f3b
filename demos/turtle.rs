//! Turtle walk: nested squares, a spiral and a custom star generator,
//! auto-fitted to the drawing's bounds.

use tracing::{info, warn};
use turtlepath::{HeadingCursor, PathError, PathSink};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut turtle = HeadingCursor::new();
    turtle.registry().register_fn("star", |sink, args| {
        let &[length, points] = args else {
            return Err(PathError::generator_failed("star", "expected length and points"));
        };
        if points < 3.0 {
            return Err(PathError::generator_failed("star", "needs at least 3 points"));
        }
        for _ in 0..points as usize {
            sink.advance(length);
            sink.turn(180.0 - 180.0 / points);
        }
        Ok(())
    });

    for size in [10.0, 20.0, 30.0, 40.0] {
        turtle.teleport(-size / 2.0, -size / 2.0);
        turtle.apply_func("square", &[size])?;
    }

    turtle.teleport(60.0, 0.0);
    for i in 1..=24 {
        turtle.forward(f64::from(i) * 1.5).rotate(60.0);
    }

    turtle.teleport(-60.0, 0.0).set_heading(0.0);
    turtle.apply_func("star", &[30.0, 5.0])?;
    if let Err(e) = turtle.apply_func("star", &[30.0, 2.0]) {
        warn!(error = %e, "two-point star rejected, cursor restored");
        eprintln!("{:?}", miette::Report::new(e));
    }

    let bounds = turtle.bounds();
    info!(width = bounds.width(), height = bounds.height(), "turtle walk finished");
    println!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
            "  <path d=\"{}\" stroke=\"black\" fill=\"none\"/>\n",
            "</svg>",
        ),
        bounds.width(),
        bounds.height(),
        turtle.fitted_path_string(),
    );
    Ok(())
}
