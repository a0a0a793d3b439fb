#![allow(dead_code)]

pub const QTYPE_A: u16 = 1;
pub const QTYPE_AAAA: u16 = 28;

/// Header with the given id, RD set and one question, followed by `name`
/// and the four QTYPE/QCLASS bytes.
pub fn query_with_raw_name(id: u16, name: &[u8], qtype: u16) -> Vec<u8> {
    let mut pkt = Vec::new();
    pkt.extend_from_slice(&id.to_be_bytes());
    pkt.extend_from_slice(&0x0100u16.to_be_bytes());
    pkt.extend_from_slice(&1u16.to_be_bytes());
    pkt.extend_from_slice(&[0u8; 6]);
    pkt.extend_from_slice(name);
    pkt.extend_from_slice(&qtype.to_be_bytes());
    pkt.extend_from_slice(&1u16.to_be_bytes());
    pkt
}

pub fn query(domain: &str, qtype: u16) -> Vec<u8> {
    let mut name = Vec::new();
    for label in domain.split('.') {
        name.push(label.len() as u8);
        name.extend_from_slice(label.as_bytes());
    }
    name.push(0);
    query_with_raw_name(0x1234, &name, qtype)
}

pub fn an_count(response: &[u8]) -> u16 {
    u16::from_be_bytes([response[6], response[7]])
}

pub fn rdata(response: &[u8]) -> &[u8] {
    &response[response.len() - 4..]
}
