//! Type-name to numeric-code registry
//!
//! The registry decides how tokens are emitted: a resolved type name with a
//! registered code becomes a coded token, any other type name becomes a bare
//! fragment. It is an explicit value constructed by the caller and handed to
//! the engine - absence of an entry is not an error.

use std::collections::HashMap;

/// Immutable table of type-name -> numeric code assignments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRegistry {
    codes: HashMap<String, i64>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a code, replacing any previous assignment for the name.
    pub fn define(&mut self, name: impl Into<String>, code: i64) {
        self.codes.insert(name.into(), code);
    }

    /// Chaining form of [`define`](Self::define).
    pub fn with(mut self, name: impl Into<String>, code: i64) -> Self {
        self.define(name, code);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.codes.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(|(n, c)| (n.into(), c)).collect(),
        }
    }
}
