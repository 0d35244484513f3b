//! Default settings for the path engine

/// Fixed scale applied to a grid's padding argument.
pub const GRID_PADDING_SCALE: f64 = 0.7;

/// Sides drawn by `polygon` when only a side length is given.
pub const POLYGON_SIDES: u32 = 6;

/// Heading of a fresh accumulator or cursor, in degrees.
pub const HEADING: f64 = 0.0;

/// Cursors recompute their bounds after every displacement unless told not to.
pub const AUTO_RESIZE: bool = true;

/// Name reported for [`crate::PathAccumulator::from_path_data`] diagnostics.
pub const PATH_DATA_SOURCE_NAME: &str = "<path data>";
