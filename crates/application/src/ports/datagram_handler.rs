use std::net::SocketAddr;

/// Socket-agnostic request path: one datagram in, at most one datagram out.
///
/// `None` means the datagram is dropped without a reply.
pub trait DatagramHandler: Send + Sync {
    fn handle(&self, datagram: &[u8], peer: SocketAddr) -> Option<Vec<u8>>;
}
