//! Type definitions stored in the registry.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{ArgsId, TypeId, TypeKind, TypeRef};

/// Field resolver hook: `(parent value, arguments) -> field value`.
///
/// Carried through compilation untouched; invoking it is the execution layer's job.
pub type Resolver = Arc<dyn Fn(&Value, &Map<String, Value>) -> Value + Send + Sync>;

/// Union discriminator hook: maps a runtime value to a member index.
pub type UnionResolver = Arc<dyn Fn(&Value) -> Option<usize> + Send + Sync>;

/// A registered type.
#[derive(Clone, Debug)]
pub enum TypeDef {
    Scalar(Arc<ScalarType>),
    Object(ObjectType),
    InputObject(InputObjectType),
    Enum(Arc<EnumType>),
    Union(UnionType),
}

impl TypeDef {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Object(_) => TypeKind::Object,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::Enum(_) => TypeKind::Enum,
            Self::Union(_) => TypeKind::Union,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(s) => &s.name,
            Self::Object(o) => &o.name,
            Self::InputObject(i) => &i.name,
            Self::Enum(e) => &e.name,
            Self::Union(u) => &u.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => s.description.as_deref(),
            Self::Object(o) => o.description.as_deref(),
            Self::InputObject(i) => i.description.as_deref(),
            Self::Enum(e) => e.description.as_deref(),
            Self::Union(u) => u.description.as_deref(),
        }
    }
}

/// Scalar type. Built-ins are pre-registered; custom scalars are authored up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }
}

/// One symbolic value of an enum.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    /// Internal value the symbol stands for.
    pub value: Value,
    pub description: Option<String>,
}

/// Enum type with values in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: IndexMap<String, EnumValue>,
}

impl EnumType {
    /// Symbol names in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Output object type. Fields are filled in after registration.
#[derive(Clone, Debug, Default)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, OutputField>,
}

/// Input object type. Fields are filled in after registration.
#[derive(Clone, Debug, Default)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, InputField>,
}

/// Field of an output object.
#[derive(Clone)]
pub struct OutputField {
    pub ty: TypeRef,
    /// Shared argument list; may still be filling up while the field exists.
    pub args: Option<ArgsId>,
    pub resolve: Option<Resolver>,
    pub subscribe: Option<Resolver>,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

impl OutputField {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            args: None,
            resolve: None,
            subscribe: None,
            description: None,
            deprecation_reason: None,
        }
    }
}

impl fmt::Debug for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputField")
            .field("ty", &self.ty)
            .field("args", &self.args)
            .field("resolve", &self.resolve.is_some())
            .field("subscribe", &self.subscribe.is_some())
            .field("description", &self.description)
            .field("deprecation_reason", &self.deprecation_reason)
            .finish()
    }
}

/// Field of an input object.
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    /// Name the field is exposed under (may differ from its map key).
    pub name: String,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

/// Entry of an argument list.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentField {
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

/// Union of object types with a runtime discriminator.
#[derive(Clone)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<TypeId>,
    pub resolver: UnionResolver,
}

impl UnionType {
    /// Pick the member type a runtime value belongs to.
    pub fn resolve_type(&self, value: &Value) -> Option<TypeId> {
        let index = (self.resolver)(value)?;
        self.members.get(index).copied()
    }
}

impl fmt::Debug for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionType")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}
