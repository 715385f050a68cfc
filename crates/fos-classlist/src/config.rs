//! classList Configuration

/// Interface name used in error messages by default
pub const DEFAULT_INTERFACE_NAME: &str = "ClassList";

/// classList configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface named in error messages ("Failed to execute 'add' on '<name>'")
    pub interface_name: String,

    /// Remove the `class` attribute from attribute-style hosts once the last
    /// token is gone, instead of leaving `class=""`
    pub clear_empty_attribute: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interface_name: DEFAULT_INTERFACE_NAME.to_string(),
            clear_empty_attribute: true,
        }
    }
}

impl Config {
    /// Use a different interface name, e.g. `DOMTokenList`
    pub fn with_interface_name(mut self, name: impl Into<String>) -> Self {
        self.interface_name = name.into();
        self
    }

    pub fn with_clear_empty_attribute(mut self, clear: bool) -> Self {
        self.clear_empty_attribute = clear;
        self
    }
}
