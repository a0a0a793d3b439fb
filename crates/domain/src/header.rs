//! Fixed 12-byte DNS message header (RFC 1035 §4.1.1).
//!
//! ```text
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    QDCOUNT                    |
//! |                    ANCOUNT                    |
//! |                    NSCOUNT                    |
//! |                    ARCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```

pub const HEADER_LEN: usize = 12;

const FLAG_QR: u16 = 0x8000;
const FLAG_AA: u16 = 0x0400;
const FLAG_TC: u16 = 0x0200;
const FLAG_RD: u16 = 0x0100;
const FLAG_RA: u16 = 0x0080;

/// Flags stamped on every synthesized reply: QR=1, RD=1, RA=1, RCODE=0.
pub const RESPONSE_FLAGS: u16 = FLAG_QR | FLAG_RD | FLAG_RA;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    /// Reads the header from the first 12 bytes of `bytes`.
    ///
    /// A buffer shorter than 12 bytes yields the all-zero header; callers
    /// treat that as "insufficient data" via [`Header::is_empty`].
    pub fn decode(bytes: &[u8]) -> Self {
        if bytes.len() < HEADER_LEN {
            return Self::default();
        }
        let field = |at: usize| u16::from_be_bytes([bytes[at], bytes[at + 1]]);
        Self {
            id: field(0),
            flags: field(2),
            qd_count: field(4),
            an_count: field(6),
            ns_count: field(8),
            ar_count: field(10),
        }
    }

    /// Writes the 12 big-endian header bytes at the start of `out`.
    ///
    /// Does nothing if `out` cannot hold a full header.
    pub fn encode(&self, out: &mut [u8]) {
        if out.len() < HEADER_LEN {
            return;
        }
        out[..HEADER_LEN].copy_from_slice(&self.to_bytes());
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[0..2].copy_from_slice(&self.id.to_be_bytes());
        bytes[2..4].copy_from_slice(&self.flags.to_be_bytes());
        bytes[4..6].copy_from_slice(&self.qd_count.to_be_bytes());
        bytes[6..8].copy_from_slice(&self.an_count.to_be_bytes());
        bytes[8..10].copy_from_slice(&self.ns_count.to_be_bytes());
        bytes[10..12].copy_from_slice(&self.ar_count.to_be_bytes());
        bytes
    }

    /// Builds the reply header for a single-question exchange.
    ///
    /// Only `id` is taken from the request; flags are always
    /// [`RESPONSE_FLAGS`] regardless of what the client sent.
    pub fn response_to(request: &Header, answered: bool) -> Self {
        Self {
            id: request.id,
            flags: RESPONSE_FLAGS,
            qd_count: 1,
            an_count: u16::from(answered),
            ns_count: 0,
            ar_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags >> 11) & 0x0F) as u8
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags & FLAG_AA != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RA != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000F) as u8
    }
}
