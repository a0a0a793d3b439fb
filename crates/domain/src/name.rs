//! Domain name decoding with compression pointer support (RFC 1035 §4.1.4).
//!
//! Names arrive from untrusted peers, so the walk never fails: malformed
//! input ends the decode and whatever was read so far is returned.

use rustc_hash::FxHashSet;

/// Longest label allowed on the wire.
pub const MAX_LABEL_LEN: u8 = 63;

const POINTER_MASK: u8 = 0xC0;

/// What a length byte at the current cursor means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Zero-length root label, terminates the name.
    End,
    /// Ordinary label of `1..=63` bytes.
    Label(usize),
    /// Top two bits `11`: a 14-bit offset follows.
    Pointer,
    /// `01` / `10` prefixes are not supported.
    Reserved,
}

impl LabelKind {
    pub fn of(byte: u8) -> Self {
        match byte {
            0 => LabelKind::End,
            b if b & POINTER_MASK == POINTER_MASK => LabelKind::Pointer,
            b if b <= MAX_LABEL_LEN => LabelKind::Label(b as usize),
            _ => LabelKind::Reserved,
        }
    }
}

/// Decodes the name starting at `start`.
///
/// Returns the dot-joined name and the offset right after the name as
/// encoded at `start` (after the terminating zero, or after the first
/// compression pointer). Pointers jump the read cursor but never move that
/// returned offset past the first pointer, so QTYPE/QCLASS can always be read
/// from it.
///
/// Every offset the cursor lands on is recorded in a visited set shared by
/// the whole decode, including across pointer jumps; landing on a visited
/// offset ends the decode. Each step records a fresh in-bounds offset, so
/// the walk takes at most `buf.len()` steps.
pub fn decode_name(buf: &[u8], start: usize) -> (String, usize) {
    let mut visited: FxHashSet<usize> = FxHashSet::default();
    let mut name = String::new();
    let mut cursor = start;
    let mut resume_at: Option<usize> = None;

    loop {
        if cursor >= buf.len() || !visited.insert(cursor) {
            break;
        }

        match LabelKind::of(buf[cursor]) {
            LabelKind::End => {
                cursor += 1;
                break;
            }
            LabelKind::Pointer => {
                let Some(&low) = buf.get(cursor + 1) else {
                    break;
                };
                let target = (usize::from(buf[cursor] & !POINTER_MASK) << 8) | usize::from(low);
                if target >= buf.len() {
                    break;
                }
                resume_at.get_or_insert(cursor + 2);
                cursor = target;
            }
            LabelKind::Label(len) => {
                let begin = cursor + 1;
                let end = begin + len;
                if end > buf.len() {
                    cursor = begin;
                    break;
                }
                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(&String::from_utf8_lossy(&buf[begin..end]));
                cursor = end;
            }
            LabelKind::Reserved => break,
        }
    }

    (name, resume_at.unwrap_or(cursor))
}
