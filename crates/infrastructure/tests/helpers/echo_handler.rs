use sinkhole_dns_application::ports::DatagramHandler;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Replies with the datagram reversed; drops anything shorter than `min_len`.
pub struct EchoHandler {
    min_len: usize,
    calls: AtomicUsize,
}

impl EchoHandler {
    pub fn new(min_len: usize) -> Self {
        Self {
            min_len,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DatagramHandler for EchoHandler {
    fn handle(&self, datagram: &[u8], _peer: SocketAddr) -> Option<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if datagram.len() < self.min_len {
            return None;
        }
        Some(datagram.iter().rev().copied().collect())
    }
}
