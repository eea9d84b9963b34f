//! Compiled schema: the type registry plus up to three root types.

use crate::sdl;
use crate::types::{ObjectType, TypeId, TypeRegistry};

/// Output of a compilation run.
///
/// Roots are object types; a schema without any root is valid but useless
/// to an execution layer.
#[derive(Clone, Debug)]
pub struct Schema {
    registry: TypeRegistry,
    query: Option<TypeId>,
    mutation: Option<TypeId>,
    subscription: Option<TypeId>,
}

impl Schema {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry,
            query: None,
            mutation: None,
            subscription: None,
        }
    }

    pub fn with_query(mut self, id: Option<TypeId>) -> Self {
        self.query = id;
        self
    }

    pub fn with_mutation(mut self, id: Option<TypeId>) -> Self {
        self.mutation = id;
        self
    }

    pub fn with_subscription(mut self, id: Option<TypeId>) -> Self {
        self.subscription = id;
        self
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn query(&self) -> Option<TypeId> {
        self.query
    }

    pub fn mutation(&self) -> Option<TypeId> {
        self.mutation
    }

    pub fn subscription(&self) -> Option<TypeId> {
        self.subscription
    }

    /// Present roots as `(conventional name, id)` pairs.
    pub fn roots(&self) -> impl Iterator<Item = (&'static str, TypeId)> + '_ {
        [
            ("Query", self.query),
            ("Mutation", self.mutation),
            ("Subscription", self.subscription),
        ]
        .into_iter()
        .filter_map(|(name, id)| id.map(|id| (name, id)))
    }

    /// Object type registered under `name`, if any.
    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        self.registry.object(self.registry.lookup(name)?)
    }

    /// Render as schema definition language.
    pub fn sdl(&self, config: &sdl::Config) -> String {
        sdl::Printer::new(self, config.clone()).print()
    }
}
