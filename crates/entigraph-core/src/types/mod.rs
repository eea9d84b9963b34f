//! Type arena, type handles, and wrapper references.

mod defs;
mod kind;
mod registry;
mod type_ref;

#[cfg(test)]
mod type_ref_tests;

pub use defs::{
    ArgumentField, EnumType, EnumValue, InputField, InputObjectType, ObjectType, OutputField,
    Resolver, ScalarType, TypeDef, UnionResolver, UnionType,
};
pub use kind::{BuiltinScalar, TypeKind};
pub use registry::{
    ArgsId, TYPE_BOOLEAN, TYPE_FLOAT, TYPE_ID, TYPE_INT, TYPE_STRING, TypeId, TypeRegistry,
};
pub use type_ref::TypeRef;
