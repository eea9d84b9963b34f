//! ANSI palette for SDL output, one color per syntactic role.

/// Escape codes the SDL printer wraps around each part of a definition.
///
/// `OFF` holds empty strings, so the printer formats the same way either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// `type`, `input`, `enum`, `union`, `scalar`, `@deprecated`
    pub keyword: &'static str,
    /// Defined and referenced type names.
    pub type_name: &'static str,
    /// Descriptions above definitions, fields and enum values.
    pub description: &'static str,
    /// Default values and deprecation reasons.
    pub literal: &'static str,
    /// Braces, `=` and `|`.
    pub punct: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        keyword: "\x1b[35m",
        type_name: "\x1b[34m",
        description: "\x1b[2;32m",
        literal: "\x1b[32m",
        punct: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        keyword: "",
        type_name: "",
        description: "",
        literal: "",
        punct: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// `text` wrapped in `color` and a reset.
    pub fn paint(&self, color: &str, text: &str) -> String {
        format!("{color}{text}{}", self.reset)
    }
}
