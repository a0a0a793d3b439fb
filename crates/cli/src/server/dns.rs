use sinkhole_dns_application::services::QueryStats;
use sinkhole_dns_application::use_cases::HandleDnsQueryUseCase;
use sinkhole_dns_infrastructure::dns::UdpDnsServer;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub async fn start_dns_server(
    bind_addr: &str,
    use_case: Arc<HandleDnsQueryUseCase>,
    stats: Arc<QueryStats>,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let server = UdpDnsServer::bind(socket_addr, use_case)?;
    info!(bind_address = %server.local_addr()?, "DNS server ready");

    let shutdown = CancellationToken::new();
    let serving = tokio::spawn(server.run(shutdown.clone()));

    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
    shutdown.cancel();
    serving.await?;

    let totals = stats.snapshot();
    info!(
        received = totals.received,
        answered = totals.answered,
        blocked = totals.blocked,
        dropped = totals.dropped,
        unsupported = totals.unsupported,
        "Query totals"
    );
    Ok(())
}
