//! Field descriptor DSL.
//!
//! A `FieldSchema` describes one field of an entity: its shape (leaf or list),
//! modifiers, and hooks. Schemas are authored once and only read by the compiler.
//!
//! ```ignore
//! FieldSchema::list(FieldSchema::string().required())
//!     .required()
//!     .comment("Tags attached to the post")
//! ```

use std::fmt;
use std::sync::Arc;

use entigraph_core::{BuiltinScalar, EnumType, Resolver, ScalarType};
use serde_json::Value;

use super::DeclId;

/// Terminal target of a field.
#[derive(Clone, Debug)]
pub enum Leaf {
    Builtin(BuiltinScalar),
    /// Custom scalar, registered on first use.
    Scalar(Arc<ScalarType>),
    /// Enum, registered on first use.
    Enum(Arc<EnumType>),
    /// Another declaration in the catalog.
    Entity(DeclId),
    /// Entity referenced by its logical name.
    Named(String),
}

#[derive(Clone, Debug, Default)]
pub enum FieldShape {
    /// No type given yet.
    #[default]
    Unset,
    Leaf(Leaf),
    List(Box<FieldSchema>),
}

/// Descriptor of a single field.
#[derive(Clone, Default)]
pub struct FieldSchema {
    pub(crate) shape: FieldShape,
    pub(crate) required: bool,
    pub(crate) default: Option<Value>,
    pub(crate) comment: Option<String>,
    pub(crate) deprecated: Option<String>,
    pub(crate) rename: Option<String>,
    pub(crate) args: Option<Box<FieldSchema>>,
    pub(crate) resolver: Option<Resolver>,
    pub(crate) subscribe: Option<Resolver>,
}

impl FieldSchema {
    /// Field with no type. Compiling it fails unless a type is set later.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    pub fn of(leaf: Leaf) -> Self {
        Self::new().with_shape(FieldShape::Leaf(leaf))
    }

    pub fn string() -> Self {
        Self::of(Leaf::Builtin(BuiltinScalar::String))
    }

    pub fn float() -> Self {
        Self::of(Leaf::Builtin(BuiltinScalar::Float))
    }

    pub fn boolean() -> Self {
        Self::of(Leaf::Builtin(BuiltinScalar::Boolean))
    }

    pub fn int() -> Self {
        Self::of(Leaf::Builtin(BuiltinScalar::Int))
    }

    pub fn id() -> Self {
        Self::of(Leaf::Builtin(BuiltinScalar::Id))
    }

    pub fn scalar(scalar: Arc<ScalarType>) -> Self {
        Self::of(Leaf::Scalar(scalar))
    }

    pub fn enumeration(enum_type: Arc<EnumType>) -> Self {
        Self::of(Leaf::Enum(enum_type))
    }

    pub fn entity(id: DeclId) -> Self {
        Self::of(Leaf::Entity(id))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::of(Leaf::Named(name.into()))
    }

    /// List of `items`.
    pub fn list(items: FieldSchema) -> Self {
        Self::new().with_shape(FieldShape::List(Box::new(items)))
    }

    /// Replace the shape, keeping modifiers.
    pub fn with_shape(mut self, shape: FieldShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Default value for input and argument fields.
    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Description shown on the compiled field.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecated = Some(reason.into());
        self
    }

    /// Exposed name for input fields.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    /// Argument object for output fields. Must reference an entity.
    pub fn args(mut self, args: FieldSchema) -> Self {
        self.args = Some(Box::new(args));
        self
    }

    pub fn resolver(
        mut self,
        f: impl Fn(&Value, &serde_json::Map<String, Value>) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.resolver = Some(Arc::new(f));
        self
    }

    pub fn subscribe(
        mut self,
        f: impl Fn(&Value, &serde_json::Map<String, Value>) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.subscribe = Some(Arc::new(f));
        self
    }

    pub fn shape(&self) -> &FieldShape {
        &self.shape
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn args_schema(&self) -> Option<&FieldSchema> {
        self.args.as_deref()
    }

    /// Leaf at the bottom of the list chain, if any.
    pub fn leaf(&self) -> Option<&Leaf> {
        match &self.shape {
            FieldShape::Unset => None,
            FieldShape::Leaf(leaf) => Some(leaf),
            FieldShape::List(items) => items.leaf(),
        }
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("shape", &self.shape)
            .field("required", &self.required)
            .field("default", &self.default)
            .field("comment", &self.comment)
            .field("deprecated", &self.deprecated)
            .field("rename", &self.rename)
            .field("args", &self.args)
            .field("resolver", &self.resolver.is_some())
            .field("subscribe", &self.subscribe.is_some())
            .finish()
    }
}
