use sinkhole_dns_application::ports::{BlocklistIndex, EmptyBlocklist};
use sinkhole_dns_domain::Config;
use sinkhole_dns_infrastructure::blocklist::{load_blocklist, InMemoryBlocklist};
use std::sync::Arc;
use tracing::{info, warn};

/// Builds the index once, before the server starts.
///
/// A missing or unreadable blocklist file is not fatal: the server starts with
/// only the custom entries, or nothing blocked at all.
pub async fn build_blocklist(config: &Config) -> Arc<dyn BlocklistIndex> {
    let blocking = &config.blocking;

    if !blocking.enabled {
        info!("Blocking disabled");
        return Arc::new(EmptyBlocklist);
    }

    let mut blocklist = match load_blocklist(&blocking.blocklist_path).await {
        Ok(blocklist) => blocklist,
        Err(e) => {
            warn!(error = %e, "Blocklist unavailable, continuing without it");
            InMemoryBlocklist::new()
        }
    };

    if !blocking.custom_blocked.is_empty() {
        blocklist.extend(blocking.custom_blocked.iter().cloned());
        info!(
            custom = blocking.custom_blocked.len(),
            "Custom blocked domains merged"
        );
    }

    info!(total = blocklist.len(), "Blocklist ready");
    Arc::new(blocklist)
}
