//! Error types with rich diagnostics using miette
//!
//! Two kinds of failure exist: contract violations (a generator that cannot be
//! resolved or that broke its own contract) and invalid input (arguments or
//! path data of the wrong shape). Numbers are never range-checked.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Broad classification of a [`PathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A programming or configuration defect: unknown generator name, or a
    /// generator that reported its contract was broken.
    ContractViolation,
    /// Arguments or path data of the wrong shape.
    InvalidInput,
}

/// Errors raised by the path engine
#[derive(Error, Diagnostic, Debug)]
pub enum PathError {
    #[error("unknown shape generator: {name}")]
    #[diagnostic(code(turtlepath::contract::unknown_generator))]
    UnknownGenerator {
        name: String,
        #[help]
        suggestion: Option<String>,
    },

    #[error("shape generator `{name}` broke its contract: {reason}")]
    #[diagnostic(
        code(turtlepath::contract::generator_failed),
        help("generators must only drive the sink they are handed")
    )]
    GeneratorFailed { name: String, reason: String },

    #[error("`{name}` expects {expected} arguments, got {got}")]
    #[diagnostic(code(turtlepath::input::argument_count))]
    ArgumentCount {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("`{name}` expects between {min} and {max} arguments, got {got}")]
    #[diagnostic(code(turtlepath::input::argument_range))]
    ArgumentRange {
        name: String,
        min: usize,
        max: usize,
        got: usize,
    },

    #[error("invalid path data: {message}")]
    #[diagnostic(code(turtlepath::input::invalid_path_data))]
    InvalidPathData {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

impl PathError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::UnknownGenerator { .. } | PathError::GeneratorFailed { .. } => {
                ErrorKind::ContractViolation
            }
            PathError::ArgumentCount { .. }
            | PathError::ArgumentRange { .. }
            | PathError::InvalidPathData { .. } => ErrorKind::InvalidInput,
        }
    }

    /// Helper for custom generators that need to refuse their input.
    pub fn generator_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PathError::GeneratorFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_generator_is_contract_violation() {
        let err = PathError::UnknownGenerator {
            name: "hexagon".into(),
            suggestion: None,
        };
        assert_eq!(err.kind(), ErrorKind::ContractViolation);
        assert_eq!(err.to_string(), "unknown shape generator: hexagon");
    }

    #[test]
    fn argument_count_is_invalid_input() {
        let err = PathError::ArgumentCount {
            name: "grid".into(),
            expected: 4,
            got: 2,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "`grid` expects 4 arguments, got 2");
    }

    #[test]
    fn argument_range_names_both_bounds() {
        let err = PathError::ArgumentRange {
            name: "polygon".into(),
            min: 1,
            max: 2,
            got: 0,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "`polygon` expects between 1 and 2 arguments, got 0");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("turtlepath::input::argument_range"));
    }

    #[test]
    fn diagnostic_codes_are_namespaced() {
        let err = PathError::generator_failed("star", "needs at least 3 points");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("turtlepath::contract::generator_failed"));
    }
}
