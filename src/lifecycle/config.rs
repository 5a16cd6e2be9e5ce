//! Runtime knobs for [`OrderingSystem`](super::OrderingSystem).

use serde::Deserialize;
use std::time::Duration;

/// Settings used when wiring the stores.
///
/// Every field has a default, so a partial document (or none at all) deserializes:
///
/// ```rust
/// use food_ordering::lifecycle::SystemConfig;
///
/// let config: SystemConfig = serde_json::from_str(r#"{ "submit_delay_ms": 50 }"#).unwrap();
/// assert_eq!(config.buffer_size, 32);
/// assert_eq!(config.submit_delay_ms, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Capacity of each store's request channel.
    pub buffer_size: usize,
    /// Latency of the simulated order gateway.
    pub submit_delay_ms: u64,
}

impl SystemConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            submit_delay_ms: 500,
        }
    }
}
