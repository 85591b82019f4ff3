use serde::{Deserialize, Serialize};

/// Prefix used when none (or an empty one) is configured.
pub const DEFAULT_METRIC_KEY_PREFIX: &str = "postgres";

/// The prefix prepended to every emitted metric and graph name.
///
/// The default is substituted when the value is constructed, so reading it never needs to
/// mutate anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MetricKeyPrefix(String);

impl MetricKeyPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if prefix.is_empty() {
            Self::default()
        } else {
            Self(prefix)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MetricKeyPrefix {
    fn default() -> Self {
        Self(DEFAULT_METRIC_KEY_PREFIX.to_string())
    }
}

impl From<String> for MetricKeyPrefix {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<MetricKeyPrefix> for String {
    fn from(value: MetricKeyPrefix) -> Self {
        value.0
    }
}

impl std::fmt::Display for MetricKeyPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let MetricKeyPrefix(prefix) = self;
        write!(f, "{prefix}")
    }
}
