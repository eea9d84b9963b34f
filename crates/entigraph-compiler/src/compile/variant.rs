//! Compiled variants of an entity.

/// Which kind of target type a declaration is compiled into.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Variant {
    /// Object type returned from fields.
    Output,
    /// Input object type nested inside arguments.
    Input,
    /// Top-level argument list of one output field.
    Argument,
}

/// Suffixes the compiler appends; declared names must not end with them.
pub const RESERVED_SUFFIXES: [&str; 2] = ["Input", "_Arg"];

impl Variant {
    pub const ALL: [Self; 3] = [Self::Output, Self::Input, Self::Argument];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Output => "",
            Self::Input => "Input",
            Self::Argument => "_Arg",
        }
    }

    /// Node name for a canonical entity name.
    pub fn apply(self, name: &str) -> String {
        format!("{name}{}", self.suffix())
    }

    /// Variant the fields of this node reference other entities under.
    ///
    /// Argument fields take input objects.
    pub fn field_variant(self) -> Self {
        match self {
            Self::Argument => Self::Input,
            other => other,
        }
    }

    /// What a node of this variant materializes as, for diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Output => "object",
            Self::Input => "input object",
            Self::Argument => "argument list",
        }
    }
}

/// The reserved suffix `name` ends with, if any.
pub fn reserved_suffix(name: &str) -> Option<&'static str> {
    RESERVED_SUFFIXES
        .into_iter()
        .find(|suffix| name.ends_with(suffix))
}
