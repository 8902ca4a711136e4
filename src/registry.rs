//! Name-keyed registries of pluggable implementations.
//!
//! Filters and formatters are selected at runtime by a configuration string.
//! A [`Registry`] maps each name to a constructor; implementations are added by
//! explicit registration, once, when the registry is first used.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown {kind} '{name}' (known: {})", .known.join(", "))]
    Unknown {
        kind: &'static str,
        name: String,
        known: Vec<&'static str>,
    },
}

/// Builds a boxed implementation from construction arguments
pub type Constructor<T, A> = fn(&A) -> Box<T>;

/// Maps unique names to constructors of `T`, taking arguments of type `A`
pub struct Registry<T: ?Sized, A = ()> {
    /// What is being registered ("filter", "formatter"), for error messages
    kind: &'static str,
    constructors: BTreeMap<&'static str, Constructor<T, A>>,
}

impl<T: ?Sized, A> Registry<T, A> {
    #[must_use]
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            constructors: BTreeMap::new(),
        }
    }

    /// Register a constructor under `name`
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered. Names are fixed at compile time,
    /// so a duplicate is a programming error.
    pub fn register(&mut self, name: &'static str, constructor: Constructor<T, A>) -> &mut Self {
        let previous = self.constructors.insert(name, constructor);
        assert!(
            previous.is_none(),
            "{} '{name}' registered twice",
            self.kind
        );
        self
    }

    /// All registered names
    #[must_use]
    pub fn known(&self) -> BTreeSet<&'static str> {
        self.constructors.keys().copied().collect()
    }

    /// Look up the constructor registered under `name`
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Unknown` if nothing is registered under `name`.
    pub fn fetch(&self, name: &str) -> Result<Constructor<T, A>, RegistryError> {
        self.constructors
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::Unknown {
                kind: self.kind,
                name: name.to_string(),
                known: self.constructors.keys().copied().collect(),
            })
    }

    /// Look up `name` and construct it with `args`
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Unknown` if nothing is registered under `name`.
    pub fn build(&self, name: &str, args: &A) -> Result<Box<T>, RegistryError> {
        self.fetch(name).map(|constructor| constructor(args))
    }
}

impl<T: ?Sized, A> fmt::Debug for Registry<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &self.kind)
            .field("names", &self.known())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter {
        fn greet(&self) -> String;
    }

    struct Hello;
    impl Greeter for Hello {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    struct Repeat(usize);
    impl Greeter for Repeat {
        fn greet(&self) -> String {
            "hi".repeat(self.0)
        }
    }

    fn hello(_: &usize) -> Box<dyn Greeter> {
        Box::new(Hello)
    }

    fn repeat(n: &usize) -> Box<dyn Greeter> {
        Box::new(Repeat(*n))
    }

    fn registry() -> Registry<dyn Greeter, usize> {
        let mut registry = Registry::new("greeter");
        registry.register("hello", hello).register("repeat", repeat);
        registry
    }

    #[test]
    fn test_known() {
        let known = registry().known();
        assert_eq!(known.into_iter().collect::<Vec<_>>(), vec!["hello", "repeat"]);
    }

    #[test]
    fn test_build_passes_arguments() {
        let registry = registry();
        assert_eq!(registry.build("hello", &3).unwrap().greet(), "hello");
        assert_eq!(registry.build("repeat", &3).unwrap().greet(), "hihihi");
    }

    #[test]
    fn test_unknown_name() {
        let err = registry().fetch("goodbye").err().unwrap();
        assert_eq!(
            err,
            RegistryError::Unknown {
                kind: "greeter",
                name: "goodbye".to_string(),
                known: vec!["hello", "repeat"],
            }
        );
        assert_eq!(
            err.to_string(),
            "Unknown greeter 'goodbye' (known: hello, repeat)"
        );
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn test_duplicate_registration_panics() {
        let mut registry = registry();
        registry.register("hello", hello);
    }
}
