//! Wrapped type references (list / non-null modifiers around a named type).

use super::TypeId;

/// Reference to a type at a use site.
///
/// `NonNull(List(NonNull(Named(String))))` reads as `[String!]!`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeRef {
    Named(TypeId),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(id: TypeId) -> Self {
        Self::Named(id)
    }

    /// Wrap in a list.
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Wrap in non-null.
    pub fn non_null(self) -> Self {
        Self::NonNull(Box::new(self))
    }

    /// The named type at the bottom of the wrapper chain.
    pub fn named_type(&self) -> TypeId {
        match self {
            Self::Named(id) => *id,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            Self::Named(_) => false,
        }
    }

    /// Number of wrappers around the named type.
    pub fn depth(&self) -> usize {
        match self {
            Self::Named(_) => 0,
            Self::List(inner) | Self::NonNull(inner) => 1 + inner.depth(),
        }
    }
}
