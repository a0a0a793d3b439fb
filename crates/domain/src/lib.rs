//! Sinkhole DNS Domain Layer
//!
//! The DNS message codec used on the request path: header, question and
//! name decoding, and synthesis of the reply.
pub mod config;
pub mod errors;
pub mod header;
pub mod name;
pub mod question;
pub mod record_type;
pub mod response;
pub mod wire_writer;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use header::{Header, HEADER_LEN};
pub use name::decode_name;
pub use question::{question_end, Question};
pub use record_type::RecordType;
pub use response::{build_response, ResponseSynthesizer};
pub use wire_writer::{WireWriter, MAX_UDP_MESSAGE_LEN};
