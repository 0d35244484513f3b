//! Composite-shape generators and the registry that names them.
//!
//! A [`Generator`] is either one of the built-in shapes or a caller-supplied
//! closure. Dispatch goes through [`ShapeGenerator`] via `enum_dispatch`, so
//! the built-ins are matched statically while the registry stays open for
//! runtime additions.

pub mod builtin;
mod registry;

use std::fmt;
use std::sync::Arc;

use enum_dispatch::enum_dispatch;

use crate::errors::PathError;
use crate::path::{PathSink, defaults};

pub use registry::{GeneratorRef, GeneratorRegistry};

/// Signature of a caller-supplied generator.
pub type GeneratorFn = dyn Fn(&mut dyn PathSink, &[f64]) -> Result<(), PathError> + Send + Sync;

/// Common behaviour for every shape generator
#[enum_dispatch]
pub trait ShapeGenerator {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Exact number of arguments, or `None` if the generator checks for itself.
    fn arity(&self) -> Option<usize>;

    /// Drive `sink`. Called directly, implementations still reject an
    /// argument list of the wrong length instead of indexing past it.
    fn generate(&self, sink: &mut dyn PathSink, args: &[f64]) -> Result<(), PathError>;
}

fn argument_count(name: &str, expected: usize, args: &[f64]) -> PathError {
    PathError::ArgumentCount {
        name: name.to_string(),
        expected,
        got: args.len(),
    }
}

/// `rect(width, height)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Rect;

impl ShapeGenerator for Rect {
    fn name(&self) -> &str {
        "rect"
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn generate(&self, sink: &mut dyn PathSink, args: &[f64]) -> Result<(), PathError> {
        let [width, height] = *args else {
            return Err(argument_count(self.name(), 2, args));
        };
        builtin::rect(sink, width, height);
        Ok(())
    }
}

/// `square(size)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Square;

impl ShapeGenerator for Square {
    fn name(&self) -> &str {
        "square"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn generate(&self, sink: &mut dyn PathSink, args: &[f64]) -> Result<(), PathError> {
        let [size] = *args else {
            return Err(argument_count(self.name(), 1, args));
        };
        builtin::square(sink, size);
        Ok(())
    }
}

/// `grid(rows, cols, size, padding)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Grid;

impl ShapeGenerator for Grid {
    fn name(&self) -> &str {
        "grid"
    }

    fn arity(&self) -> Option<usize> {
        Some(4)
    }

    fn generate(&self, sink: &mut dyn PathSink, args: &[f64]) -> Result<(), PathError> {
        let [rows, cols, size, padding] = *args else {
            return Err(argument_count(self.name(), 4, args));
        };
        builtin::grid(sink, rows, cols, size, padding);
        Ok(())
    }
}

/// `polygon(length, sides = 6)`
#[derive(Clone, Copy, Debug, Default)]
pub struct Polygon;

impl ShapeGenerator for Polygon {
    fn name(&self) -> &str {
        "polygon"
    }

    fn arity(&self) -> Option<usize> {
        None
    }

    fn generate(&self, sink: &mut dyn PathSink, args: &[f64]) -> Result<(), PathError> {
        let (length, sides) = match *args {
            [length] => (length, f64::from(defaults::POLYGON_SIDES)),
            [length, sides] => (length, sides),
            _ => {
                return Err(PathError::ArgumentRange {
                    name: self.name().to_string(),
                    min: 1,
                    max: 2,
                    got: args.len(),
                });
            }
        };
        builtin::polygon(sink, length, sides);
        Ok(())
    }
}

/// A generator backed by a closure.
#[derive(Clone)]
pub struct CustomGenerator {
    name: String,
    func: Arc<GeneratorFn>,
}

impl fmt::Debug for CustomGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomGenerator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ShapeGenerator for CustomGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> Option<usize> {
        None
    }

    fn generate(&self, sink: &mut dyn PathSink, args: &[f64]) -> Result<(), PathError> {
        (self.func)(sink, args)
    }
}

#[enum_dispatch(ShapeGenerator)]
#[derive(Clone, Debug)]
pub enum Generator {
    Rect(Rect),
    Square(Square),
    Grid(Grid),
    Polygon(Polygon),
    Custom(CustomGenerator),
}

impl Generator {
    /// Wrap a closure. The closure receives the sink and the raw argument
    /// list; it validates the arguments itself.
    pub fn custom<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut dyn PathSink, &[f64]) -> Result<(), PathError> + Send + Sync + 'static,
    {
        Generator::Custom(CustomGenerator {
            name: name.into(),
            func: Arc::new(func),
        })
    }

    /// Check the argument count, then drive the sink.
    pub fn invoke(&self, sink: &mut dyn PathSink, args: &[f64]) -> Result<(), PathError> {
        match self.arity() {
            Some(expected) if expected != args.len() => Err(PathError::ArgumentCount {
                name: self.name().to_string(),
                expected,
                got: args.len(),
            }),
            _ => self.generate(sink, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::path::PathAccumulator;

    #[test]
    fn builtins_report_names_and_arity() {
        let cases: [(Generator, &str, Option<usize>); 4] = [
            (Rect.into(), "rect", Some(2)),
            (Square.into(), "square", Some(1)),
            (Grid.into(), "grid", Some(4)),
            (Polygon.into(), "polygon", None),
        ];
        for (generator, name, arity) in cases {
            assert_eq!(generator.name(), name);
            assert_eq!(generator.arity(), arity);
        }
    }

    #[test]
    fn polygon_defaults_to_hexagon() {
        let mut acc = PathAccumulator::new();
        Generator::from(Polygon).invoke(&mut acc, &[5.0]).unwrap();
        assert_eq!(acc.len(), 7);

        let err = Generator::from(Polygon).invoke(&mut acc, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(acc.len(), 7);
    }

    #[test]
    fn polygon_reports_its_argument_range() {
        let mut acc = PathAccumulator::new();
        let err = Generator::from(Polygon).invoke(&mut acc, &[1.0, 6.0, 2.0]).unwrap_err();
        assert_eq!(err.to_string(), "`polygon` expects between 1 and 2 arguments, got 3");
    }

    #[test]
    fn direct_generate_rejects_short_argument_lists() {
        let builtins: [Generator; 3] = [Rect.into(), Square.into(), Grid.into()];
        for generator in builtins {
            let mut acc = PathAccumulator::new();
            let err = generator.generate(&mut acc, &[]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
            let expected = generator.arity().unwrap_or_default();
            assert_eq!(
                err.to_string(),
                format!("`{}` expects {expected} arguments, got 0", generator.name())
            );
            assert_eq!(acc.len(), 1);
        }
    }

    #[test]
    fn wrong_argument_count_is_rejected_before_drawing() {
        let mut acc = PathAccumulator::new();
        let err = Generator::from(Grid).invoke(&mut acc, &[2.0, 3.0]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn custom_generator_sees_raw_args() {
        let zigzag = Generator::custom("zigzag", |sink, args| {
            for (i, step) in args.iter().enumerate() {
                let dy = if i % 2 == 0 { *step } else { -*step };
                sink.line_by(*step, dy);
            }
            Ok(())
        });

        let mut acc = PathAccumulator::new();
        zigzag.invoke(&mut acc, &[1.0, 2.0]).unwrap();
        insta::assert_snapshot!(acc.build_path_string(), @"m 0 0 l 1 1 l 2 -2");
        assert_eq!(zigzag.arity(), None);
        assert!(format!("{zigzag:?}").contains("zigzag"));
    }
}
