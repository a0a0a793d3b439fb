use clap::Parser;
use sinkhole_dns_application::services::QueryStats;
use sinkhole_dns_application::use_cases::HandleDnsQueryUseCase;
use sinkhole_dns_domain::{CliOverrides, DomainError, ResponseSynthesizer};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "sinkhole-dns")]
#[command(version)]
#[command(about = "Sinkhole DNS - answers every A query locally, blocked names with 0.0.0.0")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Blocklist file, one domain per line
    #[arg(long, value_name = "FILE")]
    blocklist: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    write_config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        blocklist_path: cli.blocklist,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    if let Some(path) = cli.write_config.as_deref() {
        config.save(path)?;
        println!("Configuration written to {}", path);
        return Ok(());
    }

    bootstrap::init_logging(&config);

    info!("Starting Sinkhole DNS v{}", env!("CARGO_PKG_VERSION"));

    let blocklist = bootstrap::build_blocklist(&config).await;

    let placeholder = config
        .blocking
        .placeholder_ip()
        .ok_or_else(|| DomainError::InvalidIpAddress(config.blocking.placeholder_address.clone()))?;

    let stats = Arc::new(QueryStats::new());
    let use_case = HandleDnsQueryUseCase::new(blocklist)
        .with_synthesizer(ResponseSynthesizer::new(placeholder))
        .with_stats(Arc::clone(&stats))
        .with_packet_logging(config.logging.log_packets);

    server::start_dns_server(&config.server.listen_addr(), Arc::new(use_case), stats).await?;

    info!("Server shutdown complete");
    Ok(())
}
