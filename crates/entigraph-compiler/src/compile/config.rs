//! Compiler configuration.

/// Configuration for schema compilation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Namespace keys starting with this character are skipped
    pub(crate) private_prefix: char,
    /// Keep object and input types that end up without fields
    pub(crate) allow_empty_types: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            private_prefix: '_',
            allow_empty_types: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker for private namespace keys.
    pub fn private_prefix(mut self, value: char) -> Self {
        self.private_prefix = value;
        self
    }

    /// Set whether field-less object and input types are accepted.
    pub fn allow_empty_types(mut self, value: bool) -> Self {
        self.allow_empty_types = value;
        self
    }

    pub(crate) fn is_private(&self, key: &str) -> bool {
        key.starts_with(self.private_prefix)
    }
}
