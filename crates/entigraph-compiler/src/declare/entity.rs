//! Declarations and the catalog that owns them.

use entigraph_core::UnionResolver;
use indexmap::IndexMap;

use super::FieldSchema;

/// Stable identity of a declaration within its `Catalog`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DeclId(u32);

impl DeclId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Field metadata attached to an entity.
#[derive(Clone, Debug, Default)]
pub struct EntityDescriptor {
    /// Display name. Only consulted for metadata-bearing inline values.
    pub name: Option<String>,
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldSchema>,
}

impl EntityDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Append a field. A repeated key replaces the earlier schema.
    pub fn field(mut self, key: impl Into<String>, schema: FieldSchema) -> Self {
        self.fields.insert(key.into(), schema);
        self
    }
}

/// Reference to an entity from a union.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityRef {
    Decl(DeclId),
    Named(String),
}

/// Tagged union of entity types.
#[derive(Clone)]
pub struct UnionDecl {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<EntityRef>,
    /// Maps a runtime value to an index into `members`.
    pub resolver: UnionResolver,
}

impl std::fmt::Debug for UnionDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionDecl")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}

/// A declared value, classified once when added to the catalog.
#[derive(Clone, Debug)]
pub enum Declaration {
    /// Class-like declaration: stable name, metadata attached out of band.
    Class {
        name: String,
        descriptor: Option<EntityDescriptor>,
    },
    /// Plain mapping of field schemas, no metadata.
    Mapping(IndexMap<String, FieldSchema>),
    /// Inline value carrying metadata.
    Described(EntityDescriptor),
    Union(UnionDecl),
}

impl Declaration {
    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Class { .. } => "class",
            Self::Mapping(_) => "mapping",
            Self::Described(_) => "described",
            Self::Union(_) => "union",
        }
    }
}

/// Arena of declarations.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    decls: Vec<Declaration>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, decl: Declaration) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.decls.push(decl);
        id
    }

    /// Class-like declaration with its field metadata.
    pub fn class(&mut self, name: impl Into<String>, descriptor: EntityDescriptor) -> DeclId {
        self.push(Declaration::Class {
            name: name.into(),
            descriptor: Some(descriptor),
        })
    }

    /// Class-like declaration without metadata yet, for self and mutual references.
    pub fn declare_class(&mut self, name: impl Into<String>) -> DeclId {
        self.push(Declaration::Class {
            name: name.into(),
            descriptor: None,
        })
    }

    /// Attach metadata to a forward-declared class.
    ///
    /// Returns `false` if `id` is not a class.
    pub fn attach(&mut self, id: DeclId, descriptor: EntityDescriptor) -> bool {
        match self.decls.get_mut(id.index()) {
            Some(Declaration::Class { descriptor: slot, .. }) => {
                *slot = Some(descriptor);
                true
            }
            _ => false,
        }
    }

    pub fn mapping(&mut self, fields: IndexMap<String, FieldSchema>) -> DeclId {
        self.push(Declaration::Mapping(fields))
    }

    pub fn described(&mut self, descriptor: EntityDescriptor) -> DeclId {
        self.push(Declaration::Described(descriptor))
    }

    pub fn union(&mut self, union: UnionDecl) -> DeclId {
        self.push(Declaration::Union(union))
    }

    /// Declaration by id, or `None` if the id belongs to another catalog.
    #[inline]
    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
