use crate::response::DEFAULT_PLACEHOLDER_ADDRESS;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Plain-text list, one domain per line.
    #[serde(default = "default_blocklist_path")]
    pub blocklist_path: String,

    /// Extra domains blocked in addition to the file.
    #[serde(default)]
    pub custom_blocked: Vec<String>,

    /// Address answered for A queries that are not blocked.
    #[serde(default = "default_placeholder_address")]
    pub placeholder_address: String,
}

impl BlockingConfig {
    pub fn placeholder_ip(&self) -> Option<Ipv4Addr> {
        self.placeholder_address.parse().ok()
    }
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            blocklist_path: default_blocklist_path(),
            custom_blocked: vec![],
            placeholder_address: default_placeholder_address(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_blocklist_path() -> String {
    "blocklist.txt".to_string()
}

fn default_placeholder_address() -> String {
    DEFAULT_PLACEHOLDER_ADDRESS.to_string()
}
