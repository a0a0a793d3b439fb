//! Sinkhole DNS Infrastructure Layer
//!
//! Blocklist loading and the UDP transport that feeds datagrams to the
//! application's request handler.
pub mod blocklist;
pub mod dns;
