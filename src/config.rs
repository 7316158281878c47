//! List configuration
//!
//! Construction-time settings for a [`TriList`](crate::TriList). The name only
//! shows up in log output, which helps tell several lists apart.

/// Default number of elements to reserve on construction.
pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

/// Default list name used in log fields.
pub const DEFAULT_LIST_NAME: &str = "trilist";

/// Settings applied when a list is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Number of elements to reserve up front.
    pub initial_capacity: usize,

    /// Label attached to every log event the list emits.
    pub name: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ListConfig {
    /// Create a config with default settings.
    ///
    /// Default capacity: 0
    /// Default name: "trilist"
    pub fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            name: DEFAULT_LIST_NAME.to_string(),
        }
    }

    /// Reserve room for `capacity` elements on construction.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the label used in log events.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
