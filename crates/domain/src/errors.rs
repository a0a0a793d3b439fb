use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Failed to read blocklist {path}: {reason}")]
    BlocklistRead { path: String, reason: String },

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
