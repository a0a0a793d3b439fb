use super::in_memory::InMemoryBlocklist;
use super::parser::parse_list_text;
use sinkhole_dns_application::ports::BlocklistIndex;
use sinkhole_dns_domain::DomainError;
use std::path::Path;
use tracing::info;

/// Reads a plain-text blocklist, one domain per line.
///
/// The file is decoded lossily: a stray non-UTF-8 byte is replaced in place
/// and only affects the line it appears on.
pub async fn load_blocklist(path: impl AsRef<Path>) -> Result<InMemoryBlocklist, DomainError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DomainError::BlocklistRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let text = String::from_utf8_lossy(&bytes);
    let blocklist = InMemoryBlocklist::from_domains(parse_list_text(&text));
    info!(
        path = %path.display(),
        domains_loaded = blocklist.len(),
        "Blocklist loaded"
    );
    Ok(blocklist)
}
