use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use super::blocking::BlockingConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "sinkhole-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/sinkhole-dns/config.toml";

/// Main configuration structure for Sinkhole DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listen port and bind address
    #[serde(default)]
    pub server: ServerConfig,

    /// Blocklist source and synthesized answers
    #[serde(default)]
    pub blocking: BlockingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. sinkhole-dns.toml in current directory
    /// 3. /etc/sinkhole-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.blocklist_path {
            self.blocking.blocklist_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        let listen_addr = self.server.listen_addr();
        if listen_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid listen address '{}'",
                listen_addr
            )));
        }

        if self
            .blocking
            .placeholder_address
            .parse::<Ipv4Addr>()
            .is_err()
        {
            return Err(ConfigError::Validation(format!(
                "Placeholder address '{}' is not an IPv4 address",
                self.blocking.placeholder_address
            )));
        }

        Ok(())
    }

    /// Writes the effective configuration as TOML, every field spelled out.
    ///
    /// The result loads back through [`Config::from_file`] unchanged.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let rendered = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("cannot render config: {}", e)))?;
        std::fs::write(path, rendered)
            .map_err(|e| ConfigError::FileWrite(path.display().to_string(), e.to_string()))
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub blocklist_path: Option<String>,
    pub log_level: Option<String>,
}
