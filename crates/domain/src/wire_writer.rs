use thiserror::Error;

/// Classic (non-EDNS0) UDP DNS message size limit.
pub const MAX_UDP_MESSAGE_LEN: usize = 512;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("write of {requested} bytes exceeds the {remaining} bytes left in the message")]
pub struct WireOverflow {
    pub requested: usize,
    pub remaining: usize,
}

/// Bounded big-endian writer over a fixed 512-byte buffer.
///
/// Every append is length-checked up front. A write that does not fit is
/// refused as a whole and leaves the cursor untouched, so the bytes written
/// so far stay a well-formed prefix.
pub struct WireWriter {
    buf: [u8; MAX_UDP_MESSAGE_LEN],
    pos: usize,
}

impl WireWriter {
    pub fn new() -> Self {
        Self {
            buf: [0u8; MAX_UDP_MESSAGE_LEN],
            pos: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        MAX_UDP_MESSAGE_LEN - self.pos
    }

    pub fn put_slice(&mut self, bytes: &[u8]) -> Result<(), WireOverflow> {
        if bytes.len() > self.remaining() {
            return Err(WireOverflow {
                requested: bytes.len(),
                remaining: self.remaining(),
            });
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    pub fn put_u16(&mut self, value: u16) -> Result<(), WireOverflow> {
        self.put_slice(&value.to_be_bytes())
    }

    pub fn put_u32(&mut self, value: u32) -> Result<(), WireOverflow> {
        self.put_slice(&value.to_be_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Consumes the writer, keeping only the bytes up to the cursor.
    pub fn into_vec(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl Default for WireWriter {
    fn default() -> Self {
        Self::new()
    }
}
