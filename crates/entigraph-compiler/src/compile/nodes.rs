//! Node store: one target type per `(name, variant)`.

use entigraph_core::{ArgsId, RegistryError, TypeId, TypeKind, TypeRegistry};
use indexmap::IndexMap;

use super::Variant;
use crate::{Error, Result};

/// Materialized node. Objects and inputs are registry types; argument
/// nodes are bare argument lists owned by the fields that use them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeHandle {
    Object(TypeId),
    Input(TypeId),
    Arguments(ArgsId),
}

impl NodeHandle {
    pub fn variant(self) -> Variant {
        match self {
            Self::Object(_) => Variant::Output,
            Self::Input(_) => Variant::Input,
            Self::Arguments(_) => Variant::Argument,
        }
    }

    pub fn type_id(self) -> Option<TypeId> {
        match self {
            Self::Object(id) | Self::Input(id) => Some(id),
            Self::Arguments(_) => None,
        }
    }

    /// Whether the node's field map already has `key`.
    pub fn has_field(self, registry: &TypeRegistry, key: &str) -> bool {
        match self {
            Self::Object(id) => registry
                .object(id)
                .is_some_and(|o| o.fields.contains_key(key)),
            Self::Input(id) => registry
                .input_object(id)
                .is_some_and(|i| i.fields.contains_key(key)),
            Self::Arguments(id) => registry.arguments(id).contains_key(key),
        }
    }

    pub fn field_count(self, registry: &TypeRegistry) -> usize {
        match self {
            Self::Object(id) => registry.object(id).map_or(0, |o| o.fields.len()),
            Self::Input(id) => registry.input_object(id).map_or(0, |i| i.fields.len()),
            Self::Arguments(id) => registry.arguments(id).len(),
        }
    }
}

/// Get-or-create cache of nodes, in creation order.
#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: IndexMap<String, NodeHandle>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<NodeHandle> {
        self.nodes.get(name).copied()
    }

    /// Node for `name`, created empty on first request.
    ///
    /// Output and input nodes register their type immediately so references
    /// can point at them before any field exists.
    pub fn get_or_create(
        &mut self,
        registry: &mut TypeRegistry,
        name: &str,
        variant: Variant,
    ) -> Result<NodeHandle> {
        if let Some(&node) = self.nodes.get(name) {
            if node.variant() != variant {
                return Err(Error::TypeConflict {
                    name: name.to_owned(),
                    existing: node.variant().label(),
                    requested: variant.label(),
                });
            }
            return Ok(node);
        }

        let node = match variant {
            Variant::Output => match registry.add_object(name, None) {
                Ok(id) => NodeHandle::Object(id),
                Err(err) => return Err(clash(registry, err, variant.label())),
            },
            Variant::Input => match registry.add_input_object(name, None) {
                Ok(id) => NodeHandle::Input(id),
                Err(err) => return Err(clash(registry, err, variant.label())),
            },
            Variant::Argument => NodeHandle::Arguments(registry.add_argument_list()),
        };

        tracing::debug!(name, variant = ?variant, "node created");
        self.nodes.insert(name.to_owned(), node);
        Ok(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeHandle)> {
        self.nodes.iter().map(|(name, &node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Map a registry name clash to a `TypeConflict`.
pub(crate) fn clash(registry: &TypeRegistry, err: RegistryError, requested: &'static str) -> Error {
    match err {
        RegistryError::DuplicateType { name } => {
            let existing = registry
                .lookup(&name)
                .and_then(|id| registry.kind(id))
                .map_or("type", TypeKind::label);
            Error::TypeConflict {
                name,
                existing,
                requested,
            }
        }
        other => other.into(),
    }
}
