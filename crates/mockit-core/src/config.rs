//! Mock configuration

use serde::{Deserialize, Serialize};

/// Per-mock configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Name used in logs and failure messages; the target's name when unset
    pub label: Option<String>,
    /// Observed calls listed by a failed verification
    pub max_listed_calls: usize,
    /// Whether dispatch trace events carry the rendered arguments
    pub log_arguments: bool,
}

impl MockConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// With max listed calls
    #[inline]
    #[must_use]
    pub fn with_max_listed_calls(mut self, max: usize) -> Self {
        self.max_listed_calls = max;
        self
    }

    /// With argument logging
    #[inline]
    #[must_use]
    pub fn with_log_arguments(mut self, enabled: bool) -> Self {
        self.log_arguments = enabled;
        self
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            label: None,
            max_listed_calls: 5,
            log_arguments: true,
        }
    }
}
