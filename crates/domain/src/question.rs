use crate::header::HEADER_LEN;
use crate::name::{decode_name, LabelKind};
use crate::record_type::RecordType;

const QTYPE_QCLASS_LEN: usize = 4;

/// The first (and only honored) entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
    /// Offset right after the encoded name, where QTYPE starts.
    pub name_end: usize,
}

impl Question {
    /// Decodes the question that follows the header of `packet`.
    ///
    /// QTYPE and QCLASS read as `0` when the four bytes after the name are
    /// missing.
    pub fn decode(packet: &[u8]) -> Self {
        let (name, name_end) = decode_name(packet, HEADER_LEN);
        let (qtype, qclass) = match packet.get(name_end..name_end + QTYPE_QCLASS_LEN) {
            Some(b) => (
                u16::from_be_bytes([b[0], b[1]]),
                u16::from_be_bytes([b[2], b[3]]),
            ),
            None => (0, 0),
        };
        Self {
            name,
            qtype,
            qclass,
            name_end,
        }
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::from(self.qtype)
    }
}

/// Finds where the first question ends by rescanning the raw packet.
///
/// Independent of [`decode_name`]: length-prefixed labels are skipped from
/// offset 12; a pointer byte ends the name after two bytes and a zero byte
/// after one. QTYPE and QCLASS are then skipped. Returns `None` if that end
/// lies beyond the packet.
pub fn question_end(packet: &[u8]) -> Option<usize> {
    let mut pos = HEADER_LEN;
    while pos < packet.len() {
        let len = packet[pos];
        match LabelKind::of(len) {
            LabelKind::End => {
                pos += 1;
                break;
            }
            LabelKind::Pointer => {
                pos += 2;
                break;
            }
            LabelKind::Label(_) | LabelKind::Reserved => pos += 1 + len as usize,
        }
    }
    let end = pos + QTYPE_QCLASS_LEN;
    (end <= packet.len()).then_some(end)
}
