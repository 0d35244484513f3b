//! Cubic, smooth and quadratic curves written with the single-letter
//! mnemonics, plus a raw arc fragment.

use tracing::info;
use turtlepath::{Delimiter, PathAccumulator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    info!("drawing curve demo");

    let mut wave = PathAccumulator::new();
    wave.stroke("salmon")
        .fill("transparent")
        .stroke_width("2")
        .M(10.0, 80.0)
        .C(40.0, 10.0, 65.0, 10.0, 95.0, 80.0)
        .S(150.0, 150.0, 180.0, 80.0)
        .q(25.0, -50.0, 50.0, 0.0)
        .add_raw_fragment("a 20 20 0 0 1 40 0");
    wave.set_delimiter(Delimiter::Newline);

    let bounds = wave.bounds();
    info!(?bounds, commands = wave.len(), "traced bounds, raw fragments excluded");

    println!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\">\n",
            "<path stroke=\"{}\" fill=\"{}\" d=\"\n{}\n\"/>\n",
            "</svg>",
        ),
        bounds.view_box(),
        wave.style().stroke().unwrap_or("black"),
        wave.style().fill().unwrap_or("none"),
        wave,
    );
}
