mod blocklist_index;
mod datagram_handler;

pub use blocklist_index::{BlocklistIndex, EmptyBlocklist};
pub use datagram_handler::DatagramHandler;
