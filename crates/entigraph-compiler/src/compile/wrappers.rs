//! List / non-null modifier composition.

use entigraph_core::TypeRef;

use crate::declare::{FieldSchema, FieldShape};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Wrapper {
    List,
    NonNull,
}

/// Walk the required/list chain top-down.
///
/// Returns the wrappers outer-to-inner and the innermost non-list schema.
pub fn collect(schema: &FieldSchema) -> (Vec<Wrapper>, &FieldSchema) {
    let mut stack = Vec::new();
    let mut current = schema;
    loop {
        if current.required {
            stack.push(Wrapper::NonNull);
        }
        match &current.shape {
            FieldShape::List(items) => {
                stack.push(Wrapper::List);
                current = &**items;
            }
            _ => return (stack, current),
        }
    }
}

/// Apply wrappers innermost first (reverse push order).
pub fn apply(stack: &[Wrapper], leaf: TypeRef) -> TypeRef {
    stack.iter().rev().fold(leaf, |ty, wrapper| match wrapper {
        Wrapper::List => ty.list(),
        Wrapper::NonNull => ty.non_null(),
    })
}
