mod prefix;
mod secret;

pub use prefix::{MetricKeyPrefix, DEFAULT_METRIC_KEY_PREFIX};
pub use secret::Secret;
