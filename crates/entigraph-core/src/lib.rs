//! Target type system for entigraph.
//!
//! Three layers:
//! - **Types**: an arena of named types (`TypeRegistry`) addressed by `TypeId`,
//!   with fields populated after the handle exists so cyclic references are free.
//! - **Schema**: the compiled result, holding the registry and up to three roots.
//! - **SDL**: a printer that renders a `Schema` as schema definition language.

pub mod colors;
pub mod schema;
pub mod sdl;
pub mod types;

#[cfg(test)]
mod lib_tests;

pub use colors::Colors;
pub use schema::Schema;
pub use types::{
    ArgsId, ArgumentField, BuiltinScalar, EnumType, EnumValue, InputField, InputObjectType,
    ObjectType, OutputField, Resolver, ScalarType, TYPE_BOOLEAN, TYPE_FLOAT, TYPE_ID, TYPE_INT,
    TYPE_STRING, TypeDef, TypeId, TypeKind, TypeRef, TypeRegistry, UnionResolver, UnionType,
};

/// Errors raised by the type registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A different type already owns this name.
    #[error("type name already in use: {name}")]
    DuplicateType { name: String },

    #[error("unknown type id: {0:?}")]
    UnknownType(TypeId),

    #[error("type is not an object type: {name}")]
    NotAnObject { name: String },

    #[error("type is not an input object type: {name}")]
    NotAnInputObject { name: String },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
