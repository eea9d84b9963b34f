//! Canonical type kind definitions.

/// Discriminant of a registered type.
///
/// Payload-free mirror of `TypeDef`, used for conflict reporting and for
/// checking where a type may appear (output position, input position).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum TypeKind {
    /// Leaf value type (built-in or custom).
    Scalar = 0,
    /// Output object with resolvable fields.
    Object = 1,
    /// Input object used in arguments and nested inputs.
    InputObject = 2,
    /// Closed set of symbolic values.
    Enum = 3,
    /// Discriminated union of object types.
    Union = 4,
}

impl TypeKind {
    /// Whether values of this kind may be returned from a field.
    pub fn is_output(self) -> bool {
        !matches!(self, Self::InputObject)
    }

    /// Whether values of this kind may be passed as an argument or input field.
    pub fn is_input(self) -> bool {
        matches!(self, Self::Scalar | Self::Enum | Self::InputObject)
    }

    /// Whether this kind owns a field map (Object, InputObject).
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::InputObject)
    }

    /// Whether this kind is a terminal value (Scalar, Enum).
    pub fn is_leaf(self) -> bool {
        matches!(self, Self::Scalar | Self::Enum)
    }

    /// Human-readable label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Object => "object",
            Self::InputObject => "input object",
            Self::Enum => "enum",
            Self::Union => "union",
        }
    }
}

/// Scalars every registry starts with, at fixed ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum BuiltinScalar {
    String = 0,
    Float = 1,
    Boolean = 2,
    Int = 3,
    Id = 4,
}

impl BuiltinScalar {
    pub const ALL: [Self; 5] = [
        Self::String,
        Self::Float,
        Self::Boolean,
        Self::Int,
        Self::Id,
    ];

    /// Position in the registry arena.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::Id => "ID",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}
