#![allow(dead_code)]

/// Builds raw DNS query packets for the codec tests.
pub struct QueryPacketBuilder {
    id: u16,
    flags: u16,
    qd_count: u16,
    name: Vec<u8>,
    qtype: u16,
    qclass: u16,
    trailer: Option<Vec<u8>>,
}

impl QueryPacketBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100,
            qd_count: 1,
            name: encode_name("example.com"),
            qtype: 1,
            qclass: 1,
            trailer: None,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.name = encode_name(domain);
        self
    }

    /// Raw name bytes placed verbatim after the header.
    pub fn raw_name(mut self, bytes: &[u8]) -> Self {
        self.name = bytes.to_vec();
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn qclass(mut self, qclass: u16) -> Self {
        self.qclass = qclass;
        self
    }

    /// Replaces QTYPE/QCLASS with arbitrary trailing bytes.
    pub fn trailer(mut self, bytes: &[u8]) -> Self {
        self.trailer = Some(bytes.to_vec());
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut pkt = Vec::new();
        pkt.extend_from_slice(&self.id.to_be_bytes());
        pkt.extend_from_slice(&self.flags.to_be_bytes());
        pkt.extend_from_slice(&self.qd_count.to_be_bytes());
        pkt.extend_from_slice(&0u16.to_be_bytes());
        pkt.extend_from_slice(&0u16.to_be_bytes());
        pkt.extend_from_slice(&0u16.to_be_bytes());
        pkt.extend_from_slice(&self.name);
        match self.trailer {
            Some(trailer) => pkt.extend_from_slice(&trailer),
            None => {
                pkt.extend_from_slice(&self.qtype.to_be_bytes());
                pkt.extend_from_slice(&self.qclass.to_be_bytes());
            }
        }
        pkt
    }
}

impl Default for QueryPacketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `google.com` -> `[6]google[3]com[0]`
pub fn encode_name(domain: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn an_count(response: &[u8]) -> u16 {
    u16::from_be_bytes([response[6], response[7]])
}

pub fn rdata(response: &[u8]) -> &[u8] {
    &response[response.len() - 4..]
}
