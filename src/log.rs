//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros used by the
//! engine (registry changes, generator dispatch, rollbacks, parse failures).
//! Without it they expand to nothing, so the geometry core stays free of any
//! logging cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
