//! Ten polygons scattered across a 100x100 canvas, each drawn by name through
//! `apply_func("polygon", ..)`. Prints an SVG document to stdout.
//!
//! Run with `RUST_LOG=debug cargo run --example polygons --features tracing`
//! to see generator dispatch as well as progress.

use tracing::info;
use turtlepath::{Bounds, PathAccumulator};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut paths = Vec::new();
    let mut view = Bounds::default();
    for i in 0..10u32 {
        let x = f64::from((i * 37) % 90);
        let y = f64::from((i * 53) % 90);
        let length = f64::from(5 + i % 10);
        let sides = f64::from(5 + i % 8);

        let mut path = PathAccumulator::new();
        path.stroke(format!("hsl({} 60% 50%)", -180 + 20 * i as i32))
            .fill("transparent")
            .move_absolute(x, y)
            .rotate(f64::from(i * 36))
            .apply_func("polygon", &[length, sides])?
            .close_path();

        let bounds = path.bounds();
        info!(i, sides, view_box = %bounds.view_box(), "polygon placed");
        view.expand_point(bounds.min);
        view.expand_point(bounds.max);
        paths.push(path);
    }

    println!("{}", svg_document(&paths, &view));
    Ok(())
}

fn svg_document(paths: &[PathAccumulator], view: &Bounds) -> String {
    let mut body = String::new();
    for path in paths {
        let mut attrs = String::new();
        for (key, value) in path.style().iter() {
            attrs.push_str(&format!(" {key}=\"{value}\""));
        }
        body.push_str(&format!("  <path d=\"{path}\"{attrs}/>\n"));
    }
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\">\n{body}</svg>",
        view.view_box()
    )
}
