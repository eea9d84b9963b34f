//! Entigraph compiler: entity declarations to a resolved type graph.
//!
//! - `declare` - field descriptors, declarations, namespaces
//! - `compile` - pre-scan, reference resolution, node store, unions, traversal
//! - `enums` - enum types from value maps

pub mod compile;
pub mod declare;
pub mod enums;

#[cfg(test)]
mod enums_tests;
#[cfg(test)]
pub mod test_utils;

use entigraph_core::RegistryError;

pub use compile::{Config, Variant, compile_schema, compile_schema_with};
pub use declare::{
    Catalog, DeclId, Declaration, EntityDescriptor, EntityRef, Export, FieldSchema, FieldShape,
    Leaf, Namespace, UnionDecl,
};
pub use enums::compile_enum;

/// Errors raised while compiling a schema. All are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A class-like declaration reached the compiler without field metadata.
    #[error("missing fields on entity: {0}")]
    MissingDescriptor(String),

    /// A namespace or field refers to a declaration from another catalog.
    #[error("unknown declaration: {0:?}")]
    UnknownDeclaration(DeclId),

    #[error("entity name must not end with \"{suffix}\": {name}")]
    ReservedName { name: String, suffix: &'static str },

    #[error("duplicate field: {type_name}::{field}")]
    DuplicateField { type_name: String, field: String },

    /// One name requested as two different kinds of type.
    #[error("type `{name}` is already defined as {existing}, cannot redefine as {requested}")]
    TypeConflict {
        name: String,
        existing: &'static str,
        requested: &'static str,
    },

    #[error("missing type reference on: {type_name}::{field}")]
    MissingReference { type_name: String, field: String },

    #[error("missing argument reference on: {type_name}::{field}")]
    MissingArgument { type_name: String, field: String },

    /// An object or input type ended up without fields.
    #[error("type has no fields: {0}")]
    EmptyType(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
