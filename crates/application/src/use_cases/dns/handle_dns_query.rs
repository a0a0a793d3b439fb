use crate::ports::{BlocklistIndex, DatagramHandler};
use crate::services::QueryStats;
use sinkhole_dns_domain::{Header, Question, ResponseSynthesizer, HEADER_LEN};
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns one raw query datagram into its synthesized reply.
///
/// Holds nothing mutable besides atomic counters, so a single instance can
/// serve any number of sockets or workers.
pub struct HandleDnsQueryUseCase {
    blocklist: Arc<dyn BlocklistIndex>,
    synthesizer: ResponseSynthesizer,
    stats: Arc<QueryStats>,
    log_packets: bool,
}

impl HandleDnsQueryUseCase {
    pub fn new(blocklist: Arc<dyn BlocklistIndex>) -> Self {
        Self {
            blocklist,
            synthesizer: ResponseSynthesizer::default(),
            stats: Arc::new(QueryStats::new()),
            log_packets: false,
        }
    }

    pub fn with_synthesizer(mut self, synthesizer: ResponseSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn with_stats(mut self, stats: Arc<QueryStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_packet_logging(mut self, enabled: bool) -> Self {
        self.log_packets = enabled;
        self
    }

    /// Returns `None` only for datagrams too short to hold a header.
    pub fn execute(&self, datagram: &[u8], peer: SocketAddr) -> Option<Vec<u8>> {
        self.stats.record_received();
        debug!(bytes = datagram.len(), client = %peer, "Query received");
        if self.log_packets {
            debug!(hex = %Hex(datagram), "Query bytes");
        }

        if datagram.len() < HEADER_LEN {
            warn!(bytes = datagram.len(), client = %peer, "Query too short, dropping");
            self.stats.record_dropped();
            return None;
        }

        let header = Header::decode(datagram);
        debug!(
            id = header.id,
            flags = %format!("{:#06x}", header.flags),
            questions = header.qd_count,
            "Header decoded"
        );

        let question = Question::decode(datagram);
        let record_type = question.record_type();
        debug!(
            domain = %question.name,
            name_end = question.name_end,
            record_type = %record_type,
            qtype = question.qtype,
            qclass = question.qclass,
            "Question decoded"
        );

        let is_blocked = self.blocklist.contains(&question.name);
        if !record_type.is_address() {
            debug!(domain = %question.name, qtype = question.qtype, "Cannot answer query type");
            self.stats.record_unsupported();
        } else if is_blocked {
            info!(domain = %question.name, client = %peer, "Blocked");
            self.stats.record_blocked();
        }

        let response = self
            .synthesizer
            .build(&header, datagram, &question, is_blocked);
        self.stats.record_answered();

        debug!(bytes = response.len(), "Response built");
        if self.log_packets {
            debug!(hex = %Hex(&response), "Response bytes");
        }
        Some(response)
    }
}

impl DatagramHandler for HandleDnsQueryUseCase {
    fn handle(&self, datagram: &[u8], peer: SocketAddr) -> Option<Vec<u8>> {
        self.execute(datagram, peer)
    }
}

struct Hex<'a>(&'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
