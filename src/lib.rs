//! Turtle-graphics path building.
//!
//! Drive a [`PathAccumulator`] with absolute and relative path commands, or a
//! [`HeadingCursor`] with heading-based stepping, and read back an SVG
//! path-data string plus a bounding box for fitting a viewport. Composite
//! shapes (`rect`, `square`, `grid`, `polygon`, and anything you register)
//! are applied by name through a [`GeneratorRegistry`].
//!
//! ```
//! use turtlepath::{HeadingCursor, PathAccumulator};
//!
//! let mut path = PathAccumulator::new();
//! path.stroke("salmon").apply_func("grid", &[2.0, 2.0, 10.0, 5.0])?.close_path();
//! assert!(path.build_path_string().starts_with("m 0 0 l 10 0"));
//!
//! let mut turtle = HeadingCursor::new();
//! turtle.polygon(10.0, 4.0);
//! let bounds = turtle.bounds();
//! assert!((bounds.width() - 10.0).abs() < 1e-9);
//! # Ok::<(), turtlepath::PathError>(())
//! ```
//!
//! Enable the `tracing` feature to log generator dispatch, rollbacks and
//! rejected path data.

use pest_derive::Parser;

pub mod command;
pub mod errors;
pub mod log;
pub mod parse;
pub mod path;
pub mod shapes;
pub mod types;

pub use command::Command;
pub use errors::{ErrorKind, PathError};
pub use parse::parse_path_data;
pub use path::{CommandSink, CursorConfig, Discard, HeadingCursor, PathAccumulator, PathSink};
pub use shapes::{Generator, GeneratorRef, GeneratorRegistry, ShapeGenerator};
pub use types::{Bounds, Delimiter, FormatOptions, StyleAttributes, StyleKey};

#[derive(Parser)]
#[grammar = "path_data.pest"]
pub struct PathDataParser;
