use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl ServerConfig {
    /// `bind_address:dns_port`, bracketing IPv6 literals.
    pub fn listen_addr(&self) -> String {
        if self.bind_address.contains(':') && !self.bind_address.starts_with('[') {
            format!("[{}]:{}", self.bind_address, self.dns_port)
        } else {
            format!("{}:{}", self.bind_address, self.dns_port)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_address: default_bind_address(),
        }
    }
}

fn default_dns_port() -> u16 {
    5356
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
