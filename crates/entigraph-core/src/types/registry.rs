//! TypeRegistry: arena of named types and shared argument lists.
//!
//! Handles are indices, so a type can be referenced before its fields exist.
//! Object and input object fields are populated through `*_fields_mut` after
//! registration; everything holding the `TypeId` observes the additions.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use super::{
    ArgumentField, BuiltinScalar, EnumType, InputField, InputObjectType, ObjectType, OutputField,
    ScalarType, TypeDef, TypeKind, TypeRef, UnionType,
};
use crate::{RegistryError, Result};

/// Index into the registry arena.
///
/// Values 0-4 are reserved for the built-in scalars; user types start at 5.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeId(pub u32);

pub const TYPE_STRING: TypeId = TypeId(BuiltinScalar::String.index() as u32);
pub const TYPE_FLOAT: TypeId = TypeId(BuiltinScalar::Float.index() as u32);
pub const TYPE_BOOLEAN: TypeId = TypeId(BuiltinScalar::Boolean.index() as u32);
pub const TYPE_INT: TypeId = TypeId(BuiltinScalar::Int.index() as u32);
pub const TYPE_ID: TypeId = TypeId(BuiltinScalar::Id.index() as u32);

impl TypeId {
    pub fn is_builtin(self) -> bool {
        self.0 <= TYPE_ID.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to an argument list owned by the registry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ArgsId(pub u32);

/// Arena of every type reachable from a schema.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    types: Vec<TypeDef>,
    by_name: HashMap<String, TypeId>,
    arguments: Vec<IndexMap<String, ArgumentField>>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            types: Vec::new(),
            by_name: HashMap::new(),
            arguments: Vec::new(),
        };

        // Built-ins land at their fixed ids
        for scalar in BuiltinScalar::ALL {
            let id = registry.push(TypeDef::Scalar(Arc::new(ScalarType::new(scalar.name()))));
            debug_assert_eq!(id.index(), scalar.index());
        }

        registry
    }

    fn push(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.by_name.insert(def.name().to_owned(), id);
        self.types.push(def);
        id
    }

    fn ensure_free(&self, name: &str) -> Result<()> {
        if self.by_name.contains_key(name) {
            return Err(RegistryError::DuplicateType {
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    /// Id of a built-in scalar.
    pub fn builtin(&self, scalar: BuiltinScalar) -> TypeId {
        TypeId(scalar.index() as u32)
    }

    /// Register an empty object type.
    pub fn add_object(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<TypeId> {
        let name = name.into();
        self.ensure_free(&name)?;
        Ok(self.push(TypeDef::Object(ObjectType {
            name,
            description,
            fields: IndexMap::new(),
        })))
    }

    /// Register an empty input object type.
    pub fn add_input_object(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<TypeId> {
        let name = name.into();
        self.ensure_free(&name)?;
        Ok(self.push(TypeDef::InputObject(InputObjectType {
            name,
            description,
            fields: IndexMap::new(),
        })))
    }

    /// Register a scalar. Re-registering an identical scalar returns its existing id.
    pub fn add_scalar(&mut self, scalar: Arc<ScalarType>) -> Result<TypeId> {
        if let Some(&id) = self.by_name.get(&scalar.name) {
            return match &self.types[id.index()] {
                TypeDef::Scalar(existing)
                    if Arc::ptr_eq(existing, &scalar) || **existing == *scalar =>
                {
                    Ok(id)
                }
                _ => Err(RegistryError::DuplicateType {
                    name: scalar.name.clone(),
                }),
            };
        }
        Ok(self.push(TypeDef::Scalar(scalar)))
    }

    /// Register an enum. Re-registering an identical enum returns its existing id.
    pub fn add_enum(&mut self, enum_type: Arc<EnumType>) -> Result<TypeId> {
        if let Some(&id) = self.by_name.get(&enum_type.name) {
            return match &self.types[id.index()] {
                TypeDef::Enum(existing)
                    if Arc::ptr_eq(existing, &enum_type) || **existing == *enum_type =>
                {
                    Ok(id)
                }
                _ => Err(RegistryError::DuplicateType {
                    name: enum_type.name.clone(),
                }),
            };
        }
        Ok(self.push(TypeDef::Enum(enum_type)))
    }

    /// Register a union. Union names must be fresh.
    pub fn add_union(&mut self, union: UnionType) -> Result<TypeId> {
        self.ensure_free(&union.name)?;
        Ok(self.push(TypeDef::Union(union)))
    }

    /// Allocate an empty argument list.
    pub fn add_argument_list(&mut self) -> ArgsId {
        let id = ArgsId(self.arguments.len() as u32);
        self.arguments.push(IndexMap::new());
        id
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(id.index())
    }

    pub fn kind(&self, id: TypeId) -> Option<TypeKind> {
        self.get(id).map(TypeDef::kind)
    }

    pub fn name(&self, id: TypeId) -> Option<&str> {
        self.get(id).map(TypeDef::name)
    }

    /// Find a type by name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    pub fn object(&self, id: TypeId) -> Option<&ObjectType> {
        match self.get(id)? {
            TypeDef::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn input_object(&self, id: TypeId) -> Option<&InputObjectType> {
        match self.get(id)? {
            TypeDef::InputObject(input) => Some(input),
            _ => None,
        }
    }

    pub fn union(&self, id: TypeId) -> Option<&UnionType> {
        match self.get(id)? {
            TypeDef::Union(union) => Some(union),
            _ => None,
        }
    }

    /// Mutable field map of an object type.
    pub fn object_fields_mut(&mut self, id: TypeId) -> Result<&mut IndexMap<String, OutputField>> {
        match self.types.get_mut(id.index()) {
            Some(TypeDef::Object(object)) => Ok(&mut object.fields),
            Some(other) => Err(RegistryError::NotAnObject {
                name: other.name().to_owned(),
            }),
            None => Err(RegistryError::UnknownType(id)),
        }
    }

    /// Mutable field map of an input object type.
    pub fn input_fields_mut(&mut self, id: TypeId) -> Result<&mut IndexMap<String, InputField>> {
        match self.types.get_mut(id.index()) {
            Some(TypeDef::InputObject(input)) => Ok(&mut input.fields),
            Some(other) => Err(RegistryError::NotAnInputObject {
                name: other.name().to_owned(),
            }),
            None => Err(RegistryError::UnknownType(id)),
        }
    }

    /// Set the description of an object or input object if it has none yet.
    ///
    /// Returns whether the description was applied.
    pub fn describe(&mut self, id: TypeId, description: &str) -> Result<bool> {
        let slot = match self.types.get_mut(id.index()) {
            Some(TypeDef::Object(object)) => &mut object.description,
            Some(TypeDef::InputObject(input)) => &mut input.description,
            Some(other) => {
                return Err(RegistryError::NotAnObject {
                    name: other.name().to_owned(),
                });
            }
            None => return Err(RegistryError::UnknownType(id)),
        };
        if slot.is_some() {
            return Ok(false);
        }
        *slot = Some(description.to_owned());
        Ok(true)
    }

    /// Argument list by handle.
    ///
    /// # Panics
    /// Panics if the handle was not created by this registry.
    #[inline]
    pub fn arguments(&self, id: ArgsId) -> &IndexMap<String, ArgumentField> {
        &self.arguments[id.0 as usize]
    }

    /// Mutable argument list by handle.
    ///
    /// # Panics
    /// Panics if the handle was not created by this registry.
    #[inline]
    pub fn arguments_mut(&mut self, id: ArgsId) -> &mut IndexMap<String, ArgumentField> {
        &mut self.arguments[id.0 as usize]
    }

    /// Iterate over all types in registration order, built-ins first.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, def)| (TypeId(i as u32), def))
    }

    /// Iterate over user types (everything after the built-ins).
    pub fn user_types(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.iter().filter(|(id, _)| !id.is_builtin())
    }

    /// Number of registered types, built-ins included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Render a type reference in SDL notation, e.g. `[User!]!`.
    pub fn render(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Named(id) => self.name(*id).unwrap_or("?").to_owned(),
            TypeRef::List(inner) => format!("[{}]", self.render(inner)),
            TypeRef::NonNull(inner) => format!("{}!", self.render(inner)),
        }
    }
}
