use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Hex-dump every query and reply at debug level.
    #[serde(default)]
    pub log_packets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_packets: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
