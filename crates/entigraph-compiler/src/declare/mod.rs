//! Declaration model: field descriptors, entity declarations, namespaces.

mod entity;
mod field;
mod namespace;

#[cfg(test)]
mod entity_tests;
#[cfg(test)]
mod field_tests;

pub use entity::{Catalog, DeclId, Declaration, EntityDescriptor, EntityRef, UnionDecl};
pub use field::{FieldSchema, FieldShape, Leaf};
pub use namespace::{Export, Namespace};
