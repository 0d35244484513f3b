//! Name -> generator lookup.
//!
//! The registry is an explicit context object rather than process-wide state:
//! every accumulator or cursor holds a handle to one. Handles are cheap clones
//! of an `Arc`, so registering through any handle is visible to all holders.
//! Writes take a single writer lock.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Generator, Grid, Polygon, Rect, ShapeGenerator, Square};
use crate::errors::PathError;
use crate::log::debug;
use crate::path::PathSink;

/// How a caller names the generator to run.
#[derive(Clone, Copy, Debug)]
pub enum GeneratorRef<'a> {
    /// Looked up case-insensitively in the registry.
    Name(&'a str),
    /// Run as-is, bypassing the registry.
    Direct(&'a Generator),
}

impl<'a> From<&'a str> for GeneratorRef<'a> {
    fn from(name: &'a str) -> Self {
        GeneratorRef::Name(name)
    }
}

impl<'a> From<&'a String> for GeneratorRef<'a> {
    fn from(name: &'a String) -> Self {
        GeneratorRef::Name(name)
    }
}

impl<'a> From<&'a Generator> for GeneratorRef<'a> {
    fn from(generator: &'a Generator) -> Self {
        GeneratorRef::Direct(generator)
    }
}

#[derive(Clone, Debug)]
pub struct GeneratorRegistry {
    entries: Arc<RwLock<HashMap<String, Generator>>>,
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorRegistry {
    /// A registry holding `rect`, `square`, `grid` and `polygon`.
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.register("rect", Rect);
        registry.register("square", Square);
        registry.register("grid", Grid);
        registry.register("polygon", Polygon);
        registry
    }

    /// A registry with no generators at all.
    pub fn empty() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add or replace the generator stored under the lowercased `name`.
    /// The last registration wins.
    pub fn register(&self, name: &str, generator: impl Into<Generator>) {
        let key = name.to_lowercase();
        let previous = self.write().insert(key.clone(), generator.into());
        if previous.is_some() {
            debug!(name = %key, "replaced shape generator");
        } else {
            debug!(name = %key, "registered shape generator");
        }
    }

    /// Register a closure under `name`.
    pub fn register_fn<F>(&self, name: &str, func: F)
    where
        F: Fn(&mut dyn PathSink, &[f64]) -> Result<(), PathError> + Send + Sync + 'static,
    {
        self.register(name, Generator::custom(name.to_lowercase(), func));
    }

    pub fn get(&self, name: &str) -> Option<Generator> {
        self.read().get(&name.to_lowercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Turn a reference into a runnable generator.
    ///
    /// The generator is cloned out so the lock is not held while it runs; a
    /// generator may therefore register further generators.
    pub fn resolve(&self, generator: GeneratorRef<'_>) -> Result<Generator, PathError> {
        match generator {
            GeneratorRef::Direct(generator) => Ok(generator.clone()),
            GeneratorRef::Name(name) => self.get(name).ok_or_else(|| PathError::UnknownGenerator {
                name: name.to_string(),
                suggestion: self.suggest(name),
            }),
        }
    }

    /// Closest registered name within a small edit distance.
    fn suggest(&self, name: &str) -> Option<String> {
        let wanted = name.to_lowercase();
        self.names()
            .into_iter()
            .map(|candidate| (edit_distance(&wanted, &candidate), candidate))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, candidate)| format!("did you mean `{candidate}`?"))
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Generator>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Generator>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Levenshtein distance over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        cur[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != *cb);
            cur[j + 1] = substitution.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn new_registry_has_builtins() {
        let registry = GeneratorRegistry::new();
        assert_eq!(registry.names(), ["grid", "polygon", "rect", "square"]);
        assert!(GeneratorRegistry::empty().is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = GeneratorRegistry::new();
        assert!(registry.contains("GRID"));
        let found = registry.get("Polygon").map(|g| g.name().to_string());
        assert_eq!(found.as_deref(), Some("polygon"));
    }

    #[test]
    fn later_registration_overwrites_case_insensitively() {
        let registry = GeneratorRegistry::empty();
        registry.register_fn("square", |sink, _| {
            sink.line_by(1.0, 0.0);
            Ok(())
        });
        registry.register_fn("SQUARE", |sink, _| {
            sink.line_by(2.0, 0.0);
            Ok(())
        });

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), ["square"]);

        let mut acc = crate::path::PathAccumulator::new();
        let generator = registry.resolve("Square".into()).unwrap();
        generator.invoke(&mut acc, &[]).unwrap();
        assert_eq!(acc.build_path_string(), "m 0 0 l 2 0");
    }

    #[test]
    fn handles_share_entries() {
        let a = GeneratorRegistry::new();
        let b = a.clone();
        b.register("box", Rect);
        assert!(a.contains("box"));
    }

    #[test]
    fn unknown_name_suggests_close_match() {
        let registry = GeneratorRegistry::new();
        let err = registry.resolve("sqare".into()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ContractViolation);
        match err {
            PathError::UnknownGenerator { name, suggestion } => {
                assert_eq!(name, "sqare");
                assert_eq!(suggestion.as_deref(), Some("did you mean `square`?"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn far_names_get_no_suggestion() {
        let registry = GeneratorRegistry::new();
        match registry.resolve("hexagonal-tiling".into()) {
            Err(PathError::UnknownGenerator { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("grid", "grid"), 0);
        assert_eq!(edit_distance("gird", "grid"), 2);
        assert_eq!(edit_distance("", "rect"), 4);
        assert_eq!(edit_distance("polygons", "polygon"), 1);
    }
}
