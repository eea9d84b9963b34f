//! Configuration for SDL printing.

use crate::Colors;

/// Configuration for SDL printing.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to print type and field descriptions
    pub(crate) descriptions: bool,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descriptions: true,
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to print descriptions.
    pub fn descriptions(mut self, value: bool) -> Self {
        self.descriptions = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
