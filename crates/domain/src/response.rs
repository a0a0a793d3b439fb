//! Synthesized replies: the request's question echoed back byte for byte,
//! plus a single A record when the client asked for one.

use crate::header::{Header, HEADER_LEN};
use crate::question::{question_end, Question};
use crate::record_type::{RecordType, QCLASS_IN};
use crate::wire_writer::{WireOverflow, WireWriter, MAX_UDP_MESSAGE_LEN};
use std::net::Ipv4Addr;

/// TTL of every synthesized answer, in seconds.
pub const ANSWER_TTL: u32 = 300;

/// Address returned for names on the blocklist.
pub const BLOCKED_ADDRESS: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

/// Address returned for every other A query. No real resolution happens.
pub const DEFAULT_PLACEHOLDER_ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 1);

/// Compression pointer to offset 12, where the single question's name starts.
const ANSWER_NAME_POINTER: u16 = 0xC000 | HEADER_LEN as u16;

/// Pointer + TYPE + CLASS + TTL + RDLENGTH + IPv4 RDATA.
pub const ANSWER_RECORD_LEN: usize = 2 + 2 + 2 + 4 + 2 + 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSynthesizer {
    placeholder: Ipv4Addr,
}

impl ResponseSynthesizer {
    pub fn new(placeholder: Ipv4Addr) -> Self {
        Self { placeholder }
    }

    pub fn placeholder(&self) -> Ipv4Addr {
        self.placeholder
    }

    /// Builds the reply to `raw_request`.
    ///
    /// The question section is located by rescanning `raw_request` rather
    /// than re-encoding `question.name`, so the echo is byte-identical to
    /// what the client sent. An answer is appended only for A queries whose
    /// question could be echoed and whose reply still fits in 512 bytes;
    /// `an_count` always matches what was written. RCODE is 0 in every case.
    pub fn build(
        &self,
        request: &Header,
        raw_request: &[u8],
        question: &Question,
        is_blocked: bool,
    ) -> Vec<u8> {
        let mut out = WireWriter::new();
        // Sizes are checked before anything is written, so no append can overflow.
        let written = self.write_response(&mut out, request, raw_request, question, is_blocked);
        debug_assert!(written.is_ok(), "response layout overflowed: {written:?}");
        out.into_vec()
    }

    fn write_response(
        &self,
        out: &mut WireWriter,
        request: &Header,
        raw_request: &[u8],
        question: &Question,
        is_blocked: bool,
    ) -> Result<(), WireOverflow> {
        let echoed = question_end(raw_request)
            .and_then(|end| raw_request.get(HEADER_LEN..end))
            .filter(|section| HEADER_LEN + section.len() <= MAX_UDP_MESSAGE_LEN);

        let answered = match echoed {
            Some(section) => {
                question.record_type().is_address()
                    && HEADER_LEN + section.len() + ANSWER_RECORD_LEN <= MAX_UDP_MESSAGE_LEN
            }
            None => false,
        };

        out.put_slice(&Header::response_to(request, answered).to_bytes())?;
        if let Some(section) = echoed {
            out.put_slice(section)?;
        }
        if !answered {
            return Ok(());
        }

        let address = if is_blocked {
            BLOCKED_ADDRESS
        } else {
            self.placeholder
        };
        out.put_u16(ANSWER_NAME_POINTER)?;
        out.put_u16(RecordType::A.to_u16())?;
        out.put_u16(QCLASS_IN)?;
        out.put_u32(ANSWER_TTL)?;
        out.put_u16(4)?;
        out.put_slice(&address.octets())
    }
}

impl Default for ResponseSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_ADDRESS)
    }
}

/// [`ResponseSynthesizer::build`] with the default placeholder address.
pub fn build_response(
    request: &Header,
    raw_request: &[u8],
    question: &Question,
    is_blocked: bool,
) -> Vec<u8> {
    ResponseSynthesizer::default().build(request, raw_request, question, is_blocked)
}
