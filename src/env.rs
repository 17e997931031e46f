//! Environment lookup used by variable and tilde expansion.
//!
//! Resolvers never read `std::env` directly; they go through an
//! [`Environment`] so several independently configured resolvers can run
//! against different environments in the same process.

use std::collections::HashMap;

/// Source of environment variable values.
pub trait Environment {
    /// Return the value of `name`, or `None` when it is unset.
    fn var(&self, name: &str) -> Option<String>;

    /// Value of `name`, reading an unset variable as the empty string.
    fn var_or_empty(&self, name: &str) -> String {
        self.var(name).unwrap_or_default()
    }
}

/// Reads the environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-unicode values are treated like unset ones.
        std::env::var(name).ok()
    }
}

/// A fixed set of variables, independent of the process environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
