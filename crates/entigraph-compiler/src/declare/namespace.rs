//! Declaration modules: ordered `key -> export` maps fed to the compiler.

use indexmap::IndexMap;
use serde_json::Value;

use super::DeclId;

/// Exported value of a namespace.
#[derive(Clone, Debug, PartialEq)]
pub enum Export {
    Decl(DeclId),
    /// Anything that is not an entity (constants, helpers). Ignored by the compiler.
    Value(Value),
}

/// Ordered set of exports.
///
/// Keys `Query`, `Mutation` and `Subscription` seed the schema roots.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    exports: IndexMap<String, Export>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export a declaration under `key`.
    pub fn export(mut self, key: impl Into<String>, id: DeclId) -> Self {
        self.insert(key, Export::Decl(id));
        self
    }

    /// Export a non-entity value under `key`.
    pub fn value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, Export::Value(value));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, export: Export) {
        self.exports.insert(key.into(), export);
    }

    pub fn get(&self, key: &str) -> Option<&Export> {
        self.exports.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Export)> {
        self.exports.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}
