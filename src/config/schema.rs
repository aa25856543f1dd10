//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the config file.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LifelogConfig {
    /// Where records are appended.
    pub sink: SinkConfig,

    /// Heartbeat timer settings.
    pub heartbeat: HeartbeatConfig,

    /// Diagnostic logging settings.
    pub observability: ObservabilityConfig,
}

/// Log sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Log file path, relative to the working directory unless absolute.
    pub path: PathBuf,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("log.json"),
        }
    }
}

/// Heartbeat configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeartbeatConfig {
    /// Seconds between startup and the "Timeout done" record.
    pub delay_secs: u64,
}

impl HeartbeatConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self { delay_secs: 60 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_built_in_behaviour() {
        let config = LifelogConfig::default();
        assert_eq!(config.sink.path, PathBuf::from("log.json"));
        assert_eq!(config.heartbeat.delay(), Duration::from_secs(60));
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: LifelogConfig = toml::from_str("[heartbeat]\ndelay_secs = 5\n").unwrap();
        assert_eq!(config.heartbeat.delay_secs, 5);
        assert_eq!(config.sink.path, PathBuf::from("log.json"));
    }
}
