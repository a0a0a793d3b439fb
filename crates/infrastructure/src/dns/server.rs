use sinkhole_dns_application::ports::DatagramHandler;
use sinkhole_dns_domain::{DomainError, MAX_UDP_MESSAGE_LEN};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// UDP front-end: receives one datagram, hands it to the handler, sends the
/// reply back to the sender, then waits for the next one.
pub struct UdpDnsServer {
    socket: UdpSocket,
    handler: Arc<dyn DatagramHandler>,
}

impl UdpDnsServer {
    /// Binds the listening socket. Must be called from within a Tokio runtime.
    pub fn bind(addr: SocketAddr, handler: Arc<dyn DatagramHandler>) -> Result<Self, DomainError> {
        let socket = create_udp_socket(addr)
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP {}: {}", addr, e)))?;
        Ok(Self { socket, handler })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    /// Serves until `shutdown` is cancelled.
    ///
    /// Receive and send failures are logged and the loop carries on with the
    /// next datagram.
    pub async fn run(self, shutdown: CancellationToken) {
        let mut recv_buf = [0u8; MAX_UDP_MESSAGE_LEN];

        loop {
            let (len, peer) = tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("DNS server shutting down");
                    break;
                }
                received = self.socket.recv_from(&mut recv_buf) => match received {
                    Ok(received) => received,
                    Err(e) => {
                        warn!(error = %e, "UDP recv error");
                        continue;
                    }
                },
            };

            let Some(response) = self.handler.handle(&recv_buf[..len], peer) else {
                continue;
            };

            match self.socket.send_to(&response, peer).await {
                Ok(sent) => debug!(bytes = sent, client = %peer, "Response sent"),
                Err(e) => warn!(error = %e, client = %peer, "Failed to send response"),
            }
        }
    }
}

fn create_udp_socket(addr: SocketAddr) -> std::io::Result<UdpSocket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
